//! Error types for the engine and its configuration.
//!
//! Errors here are caller contract violations (bad positions, bad catalogs,
//! bad config files). Idle clicks are not errors; see
//! [`RevealOutcome::Ignored`](crate::engine::RevealOutcome::Ignored).

use crate::deck::TilePosition;

/// Contract violations reported by the game engine and catalog.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("tile position {position} is out of range for a deck of {len} tiles")]
    PositionOutOfRange { position: TilePosition, len: usize },

    #[error("no pair is pending resolution")]
    NoPendingPair,

    #[error("catalog item {0:?} appears more than once")]
    DuplicateItem(String),

    #[error("catalog item at index {0} has a blank name")]
    BlankItemName(usize),

    #[error("catalog has more than {max} items")]
    CatalogTooLarge { max: usize },
}

/// Errors raised while loading a [`GameConfig`](crate::core::GameConfig).
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),

    #[error(transparent)]
    Catalog(#[from] EngineError),
}
