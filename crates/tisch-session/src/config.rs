//! Session construction options.

use std::path::PathBuf;

/// Configuration for opening a [`crate::Session`].
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Where the session document lives.
    pub path: PathBuf,
    /// RNG seed for reproducible rolls; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Overrides the persisted auto-save setting when set.
    pub auto_save: Option<bool>,
}

impl SessionConfig {
    /// Configuration for the document at `path`, OS-seeded, no overrides.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            seed: None,
            auto_save: None,
        }
    }

    /// Set a fixed RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Force auto-save on or off for this session.
    pub fn with_auto_save(mut self, auto_save: bool) -> Self {
        self.auto_save = Some(auto_save);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = SessionConfig::new("game.json");
        assert_eq!(cfg.path, PathBuf::from("game.json"));
        assert!(cfg.seed.is_none());
        assert!(cfg.auto_save.is_none());
    }

    #[test]
    fn builder_methods() {
        let cfg = SessionConfig::new("game.json")
            .with_seed(42)
            .with_auto_save(false);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.auto_save, Some(false));
    }
}
