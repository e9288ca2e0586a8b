//! Item catalog: the fixed set of distinct items a deck is dealt from.
//!
//! ## Key Types
//!
//! - `ItemId`: Index of an item in its catalog
//! - `ImageRef`: Opaque display handle, never interpreted by the engine
//! - `Item`: Validated catalog entry
//! - `ItemSpec`: Unvalidated input (from code or config)
//! - `Catalog`: Ordered, name-unique list of items

pub mod item;
pub mod registry;
mod reference;

pub use item::{ImageRef, Item, ItemId, ItemSpec};
pub use reference::CARD_BACK_IMAGE;
pub use registry::Catalog;
