//! View-side driver for the engine.
//!
//! The engine is pure and synchronous. Everything that depends on time
//! (showing a pair before it is judged, leaving a mismatch on screen) lives
//! here as explicit scheduled actions that a restart cancels.
//!
//! ## Example Usage
//!
//! ```
//! use std::time::{Duration, Instant};
//! use memory_match::core::GameConfig;
//! use memory_match::deck::TilePosition;
//! use memory_match::view::{Table, TableEvent};
//!
//! let mut table = Table::from_config(&GameConfig::default().with_seed(3)).unwrap();
//! let now = Instant::now();
//!
//! table.click(TilePosition::new(0), now).unwrap();
//! table.click(TilePosition::new(1), now).unwrap();
//!
//! // Nothing happens until the reveal delay has passed.
//! assert_eq!(table.tick(now).unwrap(), None);
//! let event = table.tick(now + Duration::from_millis(400)).unwrap();
//! assert!(matches!(event, Some(TableEvent::Resolved(_))));
//! assert_eq!(table.engine().moves(), 1);
//! ```

mod table;
mod timer;

pub use table::{Overlay, Table, TableEvent, TableStatus, TileView, HELP_TEXT};
pub use timer::{ScheduledAction, SettleTimer};
