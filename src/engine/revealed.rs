//! Face-up, unresolved tiles.

use smallvec::SmallVec;

use crate::deck::TilePosition;

/// Tiles currently shown face-up and not yet matched.
///
/// Never holds more than two positions. The two-tile states differ only in
/// whether the pair still has to be counted as a move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealedSet {
    /// Nothing face-up.
    #[default]
    Hidden,
    /// First tile of a turn is face-up.
    One(TilePosition),
    /// Both tiles face-up, waiting for `resolve_pending`.
    Pending(TilePosition, TilePosition),
    /// A mismatched pair still on display, waiting for `settle`.
    Settling(TilePosition, TilePosition),
}

impl RevealedSet {
    #[must_use]
    pub fn contains(&self, position: TilePosition) -> bool {
        match *self {
            RevealedSet::Hidden => false,
            RevealedSet::One(p) => p == position,
            RevealedSet::Pending(a, b) | RevealedSet::Settling(a, b) => a == position || b == position,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            RevealedSet::Hidden => 0,
            RevealedSet::One(_) => 1,
            RevealedSet::Pending(..) | RevealedSet::Settling(..) => 2,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, RevealedSet::Hidden)
    }

    /// Face-up positions in reveal order.
    #[must_use]
    pub fn positions(&self) -> SmallVec<[TilePosition; 2]> {
        match *self {
            RevealedSet::Hidden => SmallVec::new(),
            RevealedSet::One(p) => smallvec::smallvec![p],
            RevealedSet::Pending(a, b) | RevealedSet::Settling(a, b) => smallvec::smallvec![a, b],
        }
    }
}
