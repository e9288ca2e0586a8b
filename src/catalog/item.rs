//! Catalog items - static display data.
//!
//! An `Item` is what a pair of tiles shows face-up. Which tile sits where
//! is deck state and lives in `deck::Tile`.

use serde::{Deserialize, Serialize};

/// Identifier for a catalog item.
///
/// Assigned by [`Catalog::new`](super::Catalog::new) in input order, so
/// it doubles as the item's index in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u16);

impl ItemId {
    /// Create a new item ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// The item's index in its catalog.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item({})", self.0)
    }
}

/// Opaque reference to an item's picture (a path, URL or asset key).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    #[must_use]
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unvalidated catalog entry as supplied by a caller or config file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub name: String,
    pub image: ImageRef,
}

impl ItemSpec {
    #[must_use]
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: ImageRef::new(image),
        }
    }
}

/// A validated catalog item.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Position in the catalog.
    pub id: ItemId,

    /// Display name. Unique within a catalog; pairs are matched on it.
    pub name: String,

    /// Picture shown on the tile's face.
    pub image: ImageRef,
}

impl Item {
    pub(crate) fn from_spec(id: ItemId, spec: ItemSpec) -> Self {
        Self {
            id,
            name: spec.name,
            image: spec.image,
        }
    }
}
