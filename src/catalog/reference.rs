//! The six-item catalog the game ships with.

use super::item::{ItemId, ItemSpec};
use super::registry::Catalog;

const REFERENCE_ITEMS: [(&str, &str); 6] = [
    ("Abbasid Caliphate", "images/Abbasid_Caliphate.png"),
    ("Marinid Sultanate", "images/Marinid_Sultanate.png"),
    ("Mughal Empire", "images/Mughal_Empire.png"),
    ("Ottoman Empire", "images/Ottoman_Empire_(1844-1922).png"),
    ("Seljuk Empire", "images/Seljuk_Empire.png"),
    ("Umayyad Caliphate", "images/Umayyad_Caliphate.png"),
];

/// Picture shown on every face-down tile.
pub const CARD_BACK_IMAGE: &str = "images/islamic-art-pattern.jpg";

impl Catalog {
    /// The reference catalog: six historical states and their flags.
    #[must_use]
    pub fn reference() -> Self {
        let mut catalog = Catalog::default();
        for (raw, (name, image)) in (0u16..).zip(REFERENCE_ITEMS) {
            catalog.insert(ItemId::new(raw), ItemSpec::new(name, image));
        }
        catalog
    }
}
