//! Game engine: dealing, revealing and resolving pairs.
//!
//! ## Turn Flow
//!
//! 1. `reveal(p)` turns the first tile face-up.
//! 2. `reveal(q)` turns the second tile face-up; the pair is now pending.
//! 3. `resolve_pending()` counts the move and compares the pair.
//! 4. On a mismatch, `settle()` hides the pair once the player has seen it.
//!
//! Any `reveal` while a pair is showing is ignored, so the face-up set
//! never grows past two tiles.

mod game;
mod outcome;
mod revealed;

pub use game::GameEngine;
pub use outcome::{IgnoreReason, Resolution, RevealOutcome};
pub use revealed::RevealedSet;
