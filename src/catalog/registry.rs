//! Validated, ordered item catalog.

use rustc_hash::FxHashMap;

use super::item::{Item, ItemId, ItemSpec};
use crate::core::EngineError;

/// Ordered list of distinct items.
///
/// Names are unique, so an `ItemId` and a name identify the same item.
///
/// ## Example
///
/// ```
/// use memory_match::catalog::{Catalog, ItemSpec};
///
/// let catalog = Catalog::new([
///     ItemSpec::new("Apple", "apple.png"),
///     ItemSpec::new("Pear", "pear.png"),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.find("Pear").unwrap().image.as_str(), "pear.png");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    items: Vec<Item>,
    by_name: FxHashMap<String, ItemId>,
}

impl Catalog {
    /// Most items a catalog can hold; ids are `u16`.
    pub const MAX_ITEMS: usize = u16::MAX as usize + 1;

    /// Validate and build a catalog.
    ///
    /// Fails on blank or repeated names, or when there are more items
    /// than [`MAX_ITEMS`](Self::MAX_ITEMS). An empty input is allowed and
    /// deals an already-won game.
    pub fn new(specs: impl IntoIterator<Item = ItemSpec>) -> Result<Self, EngineError> {
        let mut catalog = Self::default();

        for (index, spec) in specs.into_iter().enumerate() {
            let raw = u16::try_from(index)
                .map_err(|_| EngineError::CatalogTooLarge { max: Self::MAX_ITEMS })?;
            if spec.name.trim().is_empty() {
                return Err(EngineError::BlankItemName(index));
            }
            if catalog.by_name.contains_key(&spec.name) {
                return Err(EngineError::DuplicateItem(spec.name));
            }
            catalog.insert(ItemId::new(raw), spec);
        }

        Ok(catalog)
    }

    /// Append an item the caller knows to be valid, under the next id.
    pub(super) fn insert(&mut self, id: ItemId, spec: ItemSpec) {
        debug_assert_eq!(id.index(), self.items.len());
        self.by_name.insert(spec.name.clone(), id);
        self.items.push(Item::from_spec(id, spec));
    }

    /// Get an item by ID.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.index())
    }

    /// Find an item by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.by_name.get(name).and_then(|id| self.get(*id))
    }

    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        id.index() < self.items.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over items in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Iterate over item IDs in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().map(|item| item.id)
    }
}
