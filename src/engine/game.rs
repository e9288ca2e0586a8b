//! The shuffle-and-match game engine.

use im::OrdSet;
use log::{debug, info};
use smallvec::SmallVec;

use super::outcome::{IgnoreReason, Resolution, RevealOutcome};
use super::revealed::RevealedSet;
use crate::catalog::{Catalog, Item, ItemId};
use crate::core::{EngineError, GameRng};
use crate::deck::{Deck, Tile, TilePosition};
use crate::score::{finalize_score, ScoreStore, SessionScoreStore};

/// Game state for one table: the deal, the face-up tiles, matches and moves.
///
/// The engine is synchronous and has no notion of time. Delays between
/// `reveal`, `resolve_pending` and `settle` belong to the caller (see
/// [`Table`](crate::view::Table)).
///
/// ## Example
///
/// ```
/// use memory_match::catalog::{Catalog, ItemSpec};
/// use memory_match::core::GameRng;
/// use memory_match::deck::TilePosition;
/// use memory_match::engine::GameEngine;
///
/// let catalog = Catalog::new([ItemSpec::new("A", "a.png")]).unwrap();
/// let mut engine = GameEngine::with_session(catalog, GameRng::new(1));
///
/// // One item deals two tiles, so any two reveals make a match.
/// engine.reveal(TilePosition::new(0)).unwrap();
/// engine.reveal(TilePosition::new(1)).unwrap();
/// let resolution = engine.resolve_pending().unwrap();
///
/// assert!(resolution.game_over());
/// assert_eq!(engine.moves(), 1);
/// assert_eq!(engine.best_score(), Some(1));
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine<S = SessionScoreStore> {
    catalog: Catalog,
    deck: Deck,
    revealed: RevealedSet,
    matched: OrdSet<ItemId>,
    moves: u32,
    game_over: bool,
    generation: u64,
    rng: GameRng,
    scores: S,
}

impl GameEngine<SessionScoreStore> {
    /// Create an engine backed by a fresh in-memory score store.
    #[must_use]
    pub fn with_session(catalog: Catalog, rng: GameRng) -> Self {
        Self::new(catalog, rng, SessionScoreStore::default())
    }
}

impl<S: ScoreStore> GameEngine<S> {
    /// Create an engine and deal the first game.
    #[must_use]
    pub fn new(catalog: Catalog, rng: GameRng, scores: S) -> Self {
        let mut engine = Self {
            catalog: Catalog::default(),
            deck: Deck::default(),
            revealed: RevealedSet::Hidden,
            matched: OrdSet::new(),
            moves: 0,
            game_over: false,
            generation: 0,
            rng,
            scores,
        };
        engine.start(catalog);
        engine
    }

    /// Deal a new game from `catalog`, discarding all per-game state.
    ///
    /// The best score is kept. An empty catalog deals a game that is
    /// already over, finished in zero moves.
    pub fn start(&mut self, catalog: Catalog) {
        self.deck = Deck::deal(&catalog, &mut self.rng);
        self.catalog = catalog;
        self.revealed = RevealedSet::Hidden;
        self.matched = OrdSet::new();
        self.moves = 0;
        self.game_over = false;
        self.generation += 1;

        info!(
            "dealt game {} with {} tiles (rng seed {})",
            self.generation,
            self.deck.len(),
            self.rng.seed()
        );
        self.check_game_over();
    }

    /// Deal a new game from the current catalog.
    pub fn restart(&mut self) {
        let catalog = std::mem::take(&mut self.catalog);
        self.start(catalog);
    }

    /// Turn a tile face-up.
    ///
    /// Clicks that cannot change the board (matched tile, the same tile
    /// twice, a pair already showing, game over) are ignored. A position
    /// outside the deck is a caller error.
    pub fn reveal(&mut self, position: TilePosition) -> Result<RevealOutcome, EngineError> {
        let tile = *self.tile_checked(position)?;

        if self.game_over {
            return Ok(RevealOutcome::Ignored(IgnoreReason::GameOver));
        }
        if self.matched.contains(&tile.item) {
            return Ok(RevealOutcome::Ignored(IgnoreReason::AlreadyMatched));
        }

        let outcome = match self.revealed {
            RevealedSet::Hidden => {
                self.revealed = RevealedSet::One(position);
                RevealOutcome::Flipped(position)
            }
            RevealedSet::One(first) if first == position => {
                RevealOutcome::Ignored(IgnoreReason::AlreadyRevealed)
            }
            RevealedSet::One(first) => {
                self.revealed = RevealedSet::Pending(first, position);
                RevealOutcome::PairPending {
                    first,
                    second: position,
                }
            }
            RevealedSet::Pending(..) | RevealedSet::Settling(..) => {
                RevealOutcome::Ignored(IgnoreReason::PairShowing)
            }
        };

        debug!("reveal {} -> {:?}", position, outcome);
        Ok(outcome)
    }

    /// Compare the pending pair and count the move.
    ///
    /// A match clears the face-up tiles at once. A mismatch leaves them
    /// showing until [`settle`](Self::settle). Finding the last pair ends
    /// the game and records the score.
    pub fn resolve_pending(&mut self) -> Result<Resolution, EngineError> {
        let RevealedSet::Pending(a, b) = self.revealed else {
            return Err(EngineError::NoPendingPair);
        };
        let first = *self.tile_checked(a)?;
        let second = *self.tile_checked(b)?;

        self.moves += 1;

        let resolution = if first.pairs_with(&second) {
            self.matched.insert(first.item);
            self.revealed = RevealedSet::Hidden;
            let game_over = self.check_game_over();
            Resolution::Match {
                item: first.item,
                game_over,
            }
        } else {
            self.revealed = RevealedSet::Settling(a, b);
            Resolution::Mismatch { pair: [a, b] }
        };

        debug!("move {}: {} / {} -> {:?}", self.moves, a, b, resolution);
        Ok(resolution)
    }

    /// Hide a mismatched pair. Returns whether anything was hidden.
    pub fn settle(&mut self) -> bool {
        if let RevealedSet::Settling(..) = self.revealed {
            self.revealed = RevealedSet::Hidden;
            true
        } else {
            false
        }
    }

    fn check_game_over(&mut self) -> bool {
        if self.game_over || self.matched.len() != self.catalog.len() {
            return false;
        }
        self.game_over = true;

        let best = finalize_score(self.scores.get(), self.moves);
        self.scores.set(best);
        info!(
            "game {} finished in {} moves (best {})",
            self.generation, self.moves, best
        );
        true
    }

    fn tile_checked(&self, position: TilePosition) -> Result<&Tile, EngineError> {
        self.deck.get(position).ok_or(EngineError::PositionOutOfRange {
            position,
            len: self.deck.len(),
        })
    }

    // === Queries ===

    /// Whether the tile at `position` is face-up and unresolved.
    #[must_use]
    pub fn is_flipped(&self, position: TilePosition) -> bool {
        self.revealed.contains(position)
    }

    /// Whether `item` has been matched and its tiles removed from play.
    #[must_use]
    pub fn is_inactive(&self, item: ItemId) -> bool {
        self.matched.contains(&item)
    }

    /// Face-up, unresolved positions in reveal order.
    #[must_use]
    pub fn revealed_positions(&self) -> SmallVec<[TilePosition; 2]> {
        self.revealed.positions()
    }

    #[must_use]
    pub fn revealed(&self) -> RevealedSet {
        self.revealed
    }

    /// Whether a pair is waiting for `resolve_pending`.
    #[must_use]
    pub fn has_pending_pair(&self) -> bool {
        matches!(self.revealed, RevealedSet::Pending(..))
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn best_score(&self) -> Option<u32> {
        self.scores.get()
    }

    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    /// Matched items in ID order.
    pub fn matched_items(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.matched.iter().copied()
    }

    /// Counter bumped on every deal. Lets callers drop work queued for an
    /// earlier game.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn tile(&self, position: TilePosition) -> Option<&Tile> {
        self.deck.get(position)
    }

    /// The catalog item shown by the tile at `position`.
    #[must_use]
    pub fn item_at(&self, position: TilePosition) -> Option<&Item> {
        self.tile(position).and_then(|tile| self.catalog.get(tile.item))
    }

    #[must_use]
    pub fn scores(&self) -> &S {
        &self.scores
    }

    pub fn scores_mut(&mut self) -> &mut S {
        &mut self.scores
    }
}
