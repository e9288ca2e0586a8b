//! Best-score tracking.
//!
//! The engine never owns global state: the best score lives behind the
//! [`ScoreStore`] capability, injected at construction. Lower is better.

mod store;

pub use store::{BestScore, ScoreStore, SessionScoreStore};

/// Terminal scoring rule for a completed game.
///
/// The first completed game sets the best score; later games only lower it.
#[must_use]
pub fn finalize_score(best: Option<u32>, moves: u32) -> u32 {
    match best {
        Some(best) => best.min(moves),
        None => moves,
    }
}
