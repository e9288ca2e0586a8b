//! Headless table: the engine plus the view-side timing and overlays.

use std::time::{Duration, Instant};

use log::debug;

use super::timer::{ScheduledAction, SettleTimer};
use crate::catalog::{Item, CARD_BACK_IMAGE};
use crate::core::{ConfigError, EngineError, GameConfig};
use crate::deck::TilePosition;
use crate::engine::{GameEngine, Resolution, RevealOutcome};
use crate::score::{BestScore, ScoreStore, SessionScoreStore};

/// How to play, as shown by the help overlay.
pub const HELP_TEXT: &str = "Click on the cards to flip them. Select two cards with the same \
content consecutively to make them vanish. Match all cards to finish the game. \
The fewer moves to match all cards, the better the score.";

/// Modal shown over the board. Clicks on tiles are ignored while one is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlay {
    GameOver,
    Help,
}

/// Something `tick` did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableEvent {
    /// The pending pair was evaluated.
    Resolved(Resolution),
    /// A mismatched pair was turned face-down.
    Hidden,
}

/// Render data for one tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileView<'a> {
    pub position: TilePosition,
    pub item: &'a Item,
    /// Face-up and unresolved.
    pub flipped: bool,
    /// Matched and removed from play.
    pub inactive: bool,
}

impl TileView<'_> {
    /// Picture currently on top of the tile.
    #[must_use]
    pub fn visible_image(&self) -> &str {
        if self.flipped {
            self.item.image.as_str()
        } else {
            CARD_BACK_IMAGE
        }
    }
}

/// Score line shown above the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableStatus {
    pub moves: u32,
    pub best: BestScore,
}

impl std::fmt::Display for TableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Moves: {}  Best Score: {}", self.moves, self.best)
    }
}

/// A game table as a front-end sees it.
///
/// Clicks go through [`click`](Self::click); the front-end calls
/// [`tick`](Self::tick) whenever [`deadline`](Self::deadline) passes.
/// Restarting cancels whatever was scheduled for the old game.
#[derive(Clone, Debug)]
pub struct Table<S = SessionScoreStore> {
    engine: GameEngine<S>,
    timer: SettleTimer,
    reveal_delay: Duration,
    settle_delay: Duration,
    columns: usize,
    overlay: Option<Overlay>,
}

impl Table<SessionScoreStore> {
    /// Build a table with catalog, seed, delays and score key from `config`.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        let engine = GameEngine::new(
            config.catalog()?,
            config.rng(),
            SessionScoreStore::new(config.score_key.clone()),
        );
        Self::new(engine, config)
    }
}

impl<S: ScoreStore> Table<S> {
    /// Wrap an engine, taking delays and layout from `config`.
    ///
    /// A game that is already over (an empty catalog) opens with the
    /// game-over overlay.
    pub fn new(engine: GameEngine<S>, config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut table = Self {
            engine,
            timer: SettleTimer::new(),
            reveal_delay: config.reveal_delay(),
            settle_delay: config.settle_delay(),
            columns: config.columns,
            overlay: None,
        };
        table.sync_overlay();
        Ok(table)
    }

    /// Forward a tile click at time `now`.
    ///
    /// Returns `None` when an overlay swallowed the click. A second tile
    /// schedules the pair to be evaluated after the reveal delay.
    pub fn click(
        &mut self,
        position: TilePosition,
        now: Instant,
    ) -> Result<Option<RevealOutcome>, EngineError> {
        if self.overlay.is_some() {
            return Ok(None);
        }

        let outcome = self.engine.reveal(position)?;
        if let RevealOutcome::PairPending { .. } = outcome {
            self.timer.schedule(
                ScheduledAction::ResolvePair,
                now + self.reveal_delay,
                self.engine.generation(),
            );
        }
        Ok(Some(outcome))
    }

    /// Run the scheduled action if it is due at `now`.
    pub fn tick(&mut self, now: Instant) -> Result<Option<TableEvent>, EngineError> {
        let Some(action) = self.timer.poll(now, self.engine.generation()) else {
            return Ok(None);
        };

        let event = match action {
            ScheduledAction::ResolvePair => {
                let resolution = self.engine.resolve_pending()?;
                match resolution {
                    Resolution::Mismatch { .. } => self.timer.schedule(
                        ScheduledAction::HidePair,
                        now + self.settle_delay,
                        self.engine.generation(),
                    ),
                    Resolution::Match { game_over: true, .. } => {
                        self.overlay = Some(Overlay::GameOver);
                    }
                    Resolution::Match { .. } => {}
                }
                TableEvent::Resolved(resolution)
            }
            ScheduledAction::HidePair => {
                self.engine.settle();
                TableEvent::Hidden
            }
        };

        debug!("tick -> {:?}", event);
        Ok(Some(event))
    }

    /// Deal a new game, cancelling any scheduled action and closing overlays.
    pub fn restart(&mut self) {
        if let Some(cancelled) = self.timer.cancel() {
            debug!("restart cancelled {:?}", cancelled);
        }
        self.engine.restart();
        self.overlay = None;
        self.sync_overlay();
    }

    fn sync_overlay(&mut self) {
        if self.engine.is_game_over() {
            self.overlay = Some(Overlay::GameOver);
        }
    }

    pub fn show_help(&mut self) {
        self.overlay = Some(Overlay::Help);
    }

    /// Close the open overlay. Closing the game-over overlay leaves the
    /// finished board on screen until a restart.
    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    #[must_use]
    pub fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    /// When `tick` next has work to do.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// The action `tick` will run at the deadline.
    #[must_use]
    pub fn pending(&self) -> Option<ScheduledAction> {
        self.timer.pending()
    }

    /// Render data for every tile, in deck order.
    #[must_use]
    pub fn tiles(&self) -> Vec<TileView<'_>> {
        let catalog = self.engine.catalog();
        self.engine
            .deck()
            .iter()
            .filter_map(|tile| {
                let item = catalog.get(tile.item)?;
                Some(TileView {
                    position: tile.position,
                    item,
                    flipped: self.engine.is_flipped(tile.position),
                    inactive: self.engine.is_inactive(tile.item),
                })
            })
            .collect()
    }

    /// Tiles split into rows of the configured width.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<TileView<'_>>> {
        self.tiles()
            .chunks(self.columns)
            .map(|row| row.to_vec())
            .collect()
    }

    #[must_use]
    pub fn status(&self) -> TableStatus {
        TableStatus {
            moves: self.engine.moves(),
            best: BestScore(self.engine.best_score()),
        }
    }

    /// Message for the game-over overlay.
    #[must_use]
    pub fn game_over_text(&self) -> String {
        format!(
            "You finished the game in {} moves. Your best score is {} moves.",
            self.engine.moves(),
            BestScore(self.engine.best_score())
        )
    }

    #[must_use]
    pub fn engine(&self) -> &GameEngine<S> {
        &self.engine
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ItemSpec};
    use crate::core::GameRng;

    fn table() -> Table {
        let catalog = Catalog::new([ItemSpec::new("A", "a.png"), ItemSpec::new("B", "b.png")]).unwrap();
        let engine = GameEngine::with_session(catalog, GameRng::new(11));
        Table::new(engine, &GameConfig::default().with_seed(11)).unwrap()
    }

    #[test]
    fn test_help_overlay_swallows_clicks() {
        let mut table = table();
        table.show_help();
        assert_eq!(table.overlay(), Some(Overlay::Help));

        let outcome = table.click(TilePosition::new(0), Instant::now()).unwrap();
        assert_eq!(outcome, None);
        assert!(table.engine().revealed().is_empty());

        table.close_overlay();
        let outcome = table.click(TilePosition::new(0), Instant::now()).unwrap();
        assert_eq!(outcome, Some(RevealOutcome::Flipped(TilePosition::new(0))));
    }

    #[test]
    fn test_tiles_show_card_back_until_flipped() {
        let mut table = table();
        assert!(table.tiles().iter().all(|t| t.visible_image() == CARD_BACK_IMAGE));

        table.click(TilePosition::new(1), Instant::now()).unwrap();
        let tiles = table.tiles();
        assert!(tiles[1].flipped);
        assert_eq!(tiles[1].visible_image(), tiles[1].item.image.as_str());
        assert!(!tiles[0].flipped);
    }

    #[test]
    fn test_rows_use_column_count() {
        let table = table();
        let rows = table.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 4);
    }

    #[test]
    fn test_status_display() {
        let table = table();
        assert_eq!(table.status().to_string(), "Moves: 0  Best Score: No Score Set");
    }

    #[test]
    fn test_zero_columns_rejected() {
        let engine = GameEngine::with_session(Catalog::reference(), GameRng::new(1));
        let mut config = GameConfig::default();
        config.columns = 0;

        let err = Table::new(engine, &config).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_empty_catalog_opens_game_over() {
        let engine = GameEngine::with_session(Catalog::default(), GameRng::new(1));
        let mut table = Table::new(engine, &GameConfig::default()).unwrap();
        assert_eq!(table.overlay(), Some(Overlay::GameOver));
        assert_eq!(table.status().to_string(), "Moves: 0  Best Score: 0");

        table.close_overlay();
        table.restart();
        assert_eq!(table.overlay(), Some(Overlay::GameOver));
        assert!(table.tiles().is_empty());
    }

    #[test]
    fn test_from_config_uses_score_key() {
        let mut config = GameConfig::default().with_seed(2);
        config.score_key = "memory".to_string();
        let table = Table::from_config(&config).unwrap();

        assert_eq!(table.engine().scores().key(), "memory");
        assert_eq!(table.engine().deck().len(), 12);
    }
}
