//! Deck dealing.
//!
//! A deck is the catalog duplicated once and shuffled. It is stored as an
//! `im::Vector` so cloning the engine (e.g. for a frozen render frame) is
//! O(1).

pub mod tile;

pub use tile::{Tile, TilePosition};

use im::Vector;

use crate::catalog::{Catalog, ItemId};
use crate::core::GameRng;

/// The shuffled sequence of paired tiles for one game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    tiles: Vector<Tile>,
}

impl Deck {
    /// Deal a fresh deck: two tiles per catalog item, shuffled.
    #[must_use]
    pub fn deal(catalog: &Catalog, rng: &mut GameRng) -> Self {
        let mut items: Vec<ItemId> = catalog.ids().chain(catalog.ids()).collect();
        rng.shuffle(&mut items);
        Self::from_items(items)
    }

    /// Lay out items in the given order without shuffling.
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = ItemId>) -> Self {
        let tiles = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| Tile::new(TilePosition::new(index), item))
            .collect();
        Self { tiles }
    }

    #[must_use]
    pub fn get(&self, position: TilePosition) -> Option<&Tile> {
        self.tiles.get(position.index())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Positions of the two tiles showing `item`.
    pub fn positions_of(&self, item: ItemId) -> impl Iterator<Item = TilePosition> + '_ {
        self.tiles
            .iter()
            .filter(move |tile| tile.item == item)
            .map(|tile| tile.position)
    }
}
