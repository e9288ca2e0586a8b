//! Tiles - one face-down copy of a catalog item at a board position.

use serde::{Deserialize, Serialize};

use crate::catalog::ItemId;

/// Index of a tile in the shuffled deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TilePosition(pub usize);

impl TilePosition {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for TilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for TilePosition {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// A tile in the deck.
///
/// Every item appears on exactly two tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub position: TilePosition,
    pub item: ItemId,
}

impl Tile {
    #[must_use]
    pub const fn new(position: TilePosition, item: ItemId) -> Self {
        Self { position, item }
    }

    /// Whether two tiles show the same item.
    #[must_use]
    pub fn pairs_with(&self, other: &Tile) -> bool {
        self.item == other.item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_display() {
        assert_eq!(TilePosition::new(11).to_string(), "11");
        assert_eq!(TilePosition::from(3).index(), 3);
    }

    #[test]
    fn test_pairs_with() {
        let a1 = Tile::new(TilePosition::new(0), ItemId::new(0));
        let a2 = Tile::new(TilePosition::new(5), ItemId::new(0));
        let b = Tile::new(TilePosition::new(2), ItemId::new(1));

        assert!(a1.pairs_with(&a2));
        assert!(!a1.pairs_with(&b));
    }
}
