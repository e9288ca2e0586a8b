//! # memory-match
//!
//! A memory card game engine: deal a shuffled deck of paired tiles, flip
//! two per turn, remove matched pairs, count moves and keep the best score.
//!
//! ## Design Principles
//!
//! 1. **Pure Engine**: `GameEngine` is synchronous and clock-free. Every
//!    delay the player sees is a scheduled action owned by the view.
//!
//! 2. **Injected Scores**: The best score sits behind the `ScoreStore`
//!    trait, never in global state.
//!
//! 3. **Deterministic Deals**: Decks are shuffled with a seedable ChaCha8
//!    RNG, so a seed reproduces a game exactly.
//!
//! ## Modules
//!
//! - `core`: Errors, RNG, configuration
//! - `catalog`: Items and the validated catalog
//! - `deck`: Tiles and dealing
//! - `engine`: Reveal/resolve rules
//! - `score`: Best-score storage and the scoring rule
//! - `view`: Headless table driving the engine with cancellable timers

pub mod core;
pub mod catalog;
pub mod deck;
pub mod engine;
pub mod score;
pub mod view;

// Re-export commonly used types
pub use crate::core::{ConfigError, EngineError, GameConfig, GameRng};

pub use crate::catalog::{Catalog, ImageRef, Item, ItemId, ItemSpec};

pub use crate::deck::{Deck, Tile, TilePosition};

pub use crate::engine::{GameEngine, IgnoreReason, Resolution, RevealOutcome, RevealedSet};

pub use crate::score::{finalize_score, BestScore, ScoreStore, SessionScoreStore};

pub use crate::view::{
    Overlay, ScheduledAction, SettleTimer, Table, TableEvent, TableStatus, TileView,
};
