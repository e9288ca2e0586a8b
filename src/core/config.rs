//! Game configuration.
//!
//! Front-ends configure the engine at startup by providing a `GameConfig`,
//! usually loaded from TOML:
//!
//! ```toml
//! seed = 7
//! reveal_delay_ms = 400
//! settle_delay_ms = 400
//! columns = 4
//!
//! [[items]]
//! name = "Mughal Empire"
//! image = "images/Mughal_Empire.png"
//! ```
//!
//! Every field is optional. An empty `items` list selects the reference
//! catalog.

use std::io::Read;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, ItemSpec};

use super::error::ConfigError;
use super::rng::GameRng;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the deck shuffle. `None` seeds from the OS.
    #[serde(default)]
    pub seed: Option<u64>,

    /// How long both tiles of a pair stay visible before the pair is evaluated.
    #[serde(default = "defaults::reveal_delay_ms")]
    pub reveal_delay_ms: u64,

    /// How long a mismatched pair stays visible before it is hidden again.
    #[serde(default = "defaults::settle_delay_ms")]
    pub settle_delay_ms: u64,

    /// Tiles per row when rendering the board.
    #[serde(default = "defaults::columns")]
    pub columns: usize,

    /// Name under which the best score is stored.
    #[serde(default = "defaults::score_key")]
    pub score_key: String,

    /// Catalog entries. Empty selects [`Catalog::reference`].
    #[serde(default)]
    pub items: Vec<ItemSpec>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            reveal_delay_ms: defaults::reveal_delay_ms(),
            settle_delay_ms: defaults::settle_delay_ms(),
            columns: defaults::columns(),
            score_key: defaults::score_key(),
            items: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a config file.
    pub fn from_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = std::fs::File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Self::from_toml_str(&contents)
    }

    /// Check values that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::Invalid("columns must be at least 1".into()));
        }
        if self.score_key.trim().is_empty() {
            return Err(ConfigError::Invalid("score_key must not be blank".into()));
        }
        Ok(())
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the reveal delay.
    #[must_use]
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the settle delay.
    #[must_use]
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Add a catalog entry.
    #[must_use]
    pub fn with_item(mut self, item: ItemSpec) -> Self {
        self.items.push(item);
        self
    }

    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Build the RNG for this config.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }

    /// Build the catalog for this config.
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        if self.items.is_empty() {
            return Ok(Catalog::reference());
        }
        Ok(Catalog::new(self.items.iter().cloned())?)
    }
}

mod defaults {
    pub fn reveal_delay_ms() -> u64 { 400 }
    pub fn settle_delay_ms() -> u64 { 400 }
    pub fn columns() -> usize { 4 }
    pub fn score_key() -> String { "bestScore".to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EngineError;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.reveal_delay(), Duration::from_millis(400));
        assert_eq!(config.settle_delay(), Duration::from_millis(400));
        assert_eq!(config.columns, 4);
        assert_eq!(config.score_key, "bestScore");
        assert!(config.items.is_empty());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_toml_with_items() {
        let config = GameConfig::from_toml_str(
            r#"
            seed = 7
            settle_delay_ms = 1000

            [[items]]
            name = "A"
            image = "a.png"

            [[items]]
            name = "B"
            image = "b.png"
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.settle_delay(), Duration::from_secs(1));
        assert_eq!(config.reveal_delay_ms, 400);

        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.find("B").is_some());
    }

    #[test]
    fn test_empty_items_select_reference_catalog() {
        let catalog = GameConfig::default().catalog().unwrap();
        assert_eq!(catalog.len(), Catalog::reference().len());
    }

    #[test]
    fn test_duplicate_items_rejected() {
        let config = GameConfig::default()
            .with_item(ItemSpec::new("A", "a.png"))
            .with_item(ItemSpec::new("A", "other.png"));

        match config.catalog() {
            Err(ConfigError::Catalog(EngineError::DuplicateItem(name))) => assert_eq!(name, "A"),
            other => panic!("expected duplicate item error, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_columns_rejected() {
        let err = GameConfig::from_toml_str("columns = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = GameConfig::from_toml_str("seed = \"seven\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::from_toml("/nonexistent/memory-match.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_seed(123)
            .with_reveal_delay(Duration::from_millis(50))
            .with_settle_delay(Duration::from_millis(75));

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.reveal_delay_ms, 50);
        assert_eq!(config.settle_delay_ms, 75);
        assert_eq!(config.rng().seed(), 123);
    }

    #[test]
    fn test_oversized_delay_saturates() {
        let config = GameConfig::default()
            .with_reveal_delay(Duration::MAX)
            .with_settle_delay(Duration::from_secs(u64::MAX));

        assert_eq!(config.reveal_delay_ms, u64::MAX);
        assert_eq!(config.settle_delay_ms, u64::MAX);
        assert_eq!(config.reveal_delay(), Duration::from_millis(u64::MAX));
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(5);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
