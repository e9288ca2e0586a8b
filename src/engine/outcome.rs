//! Results of engine operations, for the view to react to.

use crate::catalog::ItemId;
use crate::deck::TilePosition;

/// What a call to `reveal` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// First tile of a turn turned face-up.
    Flipped(TilePosition),
    /// Second tile turned face-up; the pair awaits `resolve_pending`.
    PairPending {
        first: TilePosition,
        second: TilePosition,
    },
    /// The click had no effect.
    Ignored(IgnoreReason),
}

impl RevealOutcome {
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, RevealOutcome::Ignored(_))
    }
}

/// Why a click was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Every pair has been found.
    GameOver,
    /// The tile's item is already matched.
    AlreadyMatched,
    /// The tile is already face-up.
    AlreadyRevealed,
    /// Two tiles are on display; wait for them to resolve.
    PairShowing,
}

/// Result of comparing a pending pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Both tiles showed `item`. `game_over` is set on the final pair.
    Match { item: ItemId, game_over: bool },
    /// Different items; the pair stays visible until `settle`.
    Mismatch { pair: [TilePosition; 2] },
}

impl Resolution {
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Resolution::Match { .. })
    }

    #[must_use]
    pub fn game_over(&self) -> bool {
        matches!(self, Resolution::Match { game_over: true, .. })
    }
}
