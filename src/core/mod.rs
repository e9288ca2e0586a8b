//! Core engine support: errors, RNG, configuration.
//!
//! Nothing here knows about tiles or pairs beyond the error variants;
//! the game rules live in `engine`.

pub mod config;
pub mod error;
pub mod rng;

pub use config::GameConfig;
pub use error::{ConfigError, EngineError};
pub use rng::GameRng;
