use rustc_hash::FxHashMap;

/// Get/set access to the best score.
pub trait ScoreStore {
    /// Current best score, if any game has been completed.
    fn get(&self) -> Option<u32>;

    /// Replace the best score.
    fn set(&mut self, score: u32);
}

/// In-memory store that lives as long as the process.
///
/// Scores are kept by name, like a browser's session storage; each store
/// handle reads and writes one key.
#[derive(Clone, Debug)]
pub struct SessionScoreStore {
    key: String,
    slots: FxHashMap<String, u32>,
}

impl SessionScoreStore {
    pub const DEFAULT_KEY: &'static str = "bestScore";

    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            slots: FxHashMap::default(),
        }
    }

    /// Start with a known best score.
    #[must_use]
    pub fn with_best(mut self, score: u32) -> Self {
        self.set(score);
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Drop every stored score, as ending a browser session would.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl Default for SessionScoreStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_KEY)
    }
}

impl ScoreStore for SessionScoreStore {
    fn get(&self) -> Option<u32> {
        self.slots.get(&self.key).copied()
    }

    fn set(&mut self, score: u32) {
        self.slots.insert(self.key.clone(), score);
    }
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn get(&self) -> Option<u32> {
        (**self).get()
    }

    fn set(&mut self, score: u32) {
        (**self).set(score);
    }
}

/// Display wrapper for an optional best score.
///
/// Renders `No Score Set` until a game has been completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BestScore(pub Option<u32>);

impl std::fmt::Display for BestScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(score) => write!(f, "{}", score),
            None => f.write_str("No Score Set"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_store_starts_empty() {
        let store = SessionScoreStore::default();
        assert_eq!(store.key(), "bestScore");
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_session_store_set_and_clear() {
        let mut store = SessionScoreStore::new("custom");
        store.set(14);
        assert_eq!(store.get(), Some(14));

        store.set(11);
        assert_eq!(store.get(), Some(11));

        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_with_best() {
        let store = SessionScoreStore::default().with_best(8);
        assert_eq!(store.get(), Some(8));
    }

    #[test]
    fn test_boxed_store() {
        let mut store: Box<dyn ScoreStore> = Box::new(SessionScoreStore::default());
        store.set(3);
        assert_eq!(store.get(), Some(3));
    }

    #[test]
    fn test_best_score_display() {
        assert_eq!(BestScore(None).to_string(), "No Score Set");
        assert_eq!(BestScore(Some(6)).to_string(), "6");
    }
}
