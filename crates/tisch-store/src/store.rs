//! The on-disk JSON document store.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use tisch_core::SessionDocument;

use crate::error::StoreResult;

/// Maximum number of roll records kept in the persisted document.
pub const PERSIST_CAP: usize = 100;

/// The outcome of loading the document.
///
/// Loading never fails: when the file is missing the defaults are returned
/// silently, and when it exists but cannot be read or parsed the defaults
/// are returned together with a warning the caller can surface.
#[derive(Debug)]
pub struct LoadResult {
    /// The loaded (or default) document.
    pub document: SessionDocument,
    /// Set when an existing file had to be ignored.
    pub warning: Option<String>,
}

/// Persists one [`SessionDocument`] as pretty-printed JSON at a fixed path.
///
/// Single-writer by assumption: two processes pointed at the same file are
/// not coordinated and the last save wins.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a store for the document at `path`. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document, falling back to defaults.
    ///
    /// Stored keys override defaults, missing keys keep them (each document
    /// field carries a serde default).
    pub fn load(&self) -> LoadResult {
        if !self.path.exists() {
            return LoadResult {
                document: SessionDocument::default(),
                warning: None,
            };
        }

        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) => {
                return LoadResult {
                    document: SessionDocument::default(),
                    warning: Some(format!(
                        "cannot read {}: {e}; starting from defaults",
                        self.path.display()
                    )),
                };
            }
        };

        match SessionDocument::from_json(&text) {
            Ok(document) => LoadResult {
                document,
                warning: None,
            },
            Err(e) => LoadResult {
                document: SessionDocument::default(),
                warning: Some(format!(
                    "cannot parse {}: {e}; starting from defaults",
                    self.path.display()
                )),
            },
        }
    }

    /// Write the document, stamping `last_saved` and enforcing the persisted
    /// cap on both collections (oldest entries are evicted first).
    ///
    /// The stamp is applied to the caller's document so the in-memory copy
    /// matches what was written. On error the previously persisted state is
    /// left untouched.
    pub fn save(&self, document: &mut SessionDocument) -> StoreResult<()> {
        document.last_saved = Some(Utc::now());
        // History is newest first, players oldest first.
        if document.dice_history.len() > PERSIST_CAP {
            document.dice_history.truncate(PERSIST_CAP);
        }
        if document.players.len() > PERSIST_CAP {
            let excess = document.players.len() - PERSIST_CAP;
            document.players.drain(..excess);
        }
        let json = document.to_json_pretty()?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Delete the stored document; a later [`Store::load`] returns defaults.
    ///
    /// Deleting a store that was never saved is a no-op.
    pub fn reset(&self) -> StoreResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tisch_core::{ColorTag, Player, RollRecord};

    fn store_in(dir: &tempfile::TempDir) -> Store {
        Store::new(dir.path().join("session.json"))
    }

    #[test]
    fn load_missing_file_yields_defaults_without_warning() {
        let dir = tempfile::tempdir().unwrap();
        let result = store_in(&dir).load();
        assert!(result.document.players.is_empty());
        assert!(result.warning.is_none());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut doc = SessionDocument::default();
        doc.players.push(Player::new(1, "Aria", 20, ColorTag::default()));
        doc.dice_history.push(RollRecord::new(1, "d6", 6, vec![3, 4]));
        store.save(&mut doc).unwrap();

        assert!(doc.last_saved.is_some());

        let loaded = store.load();
        assert!(loaded.warning.is_none());
        assert_eq!(loaded.document.players.len(), 1);
        assert_eq!(loaded.document.players[0].name, "Aria");
        assert_eq!(loaded.document.dice_history[0].total, 7);
        assert_eq!(loaded.document.last_saved, doc.last_saved);
    }

    #[test]
    fn corrupt_file_recovers_to_defaults_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{not json at all").unwrap();

        let result = store.load();
        assert!(result.document.players.is_empty());
        let warning = result.warning.unwrap();
        assert!(warning.contains("starting from defaults"));
    }

    #[test]
    fn save_enforces_persist_cap() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut doc = SessionDocument::default();
        for i in 0..(PERSIST_CAP as u64 + 20) {
            // Newest first, as the history maintains them.
            doc.dice_history
                .insert(0, RollRecord::new(i + 1, "d6", 6, vec![1]));
        }
        store.save(&mut doc).unwrap();

        assert_eq!(doc.dice_history.len(), PERSIST_CAP);
        // The newest record survives, the oldest fell off the tail.
        assert_eq!(doc.dice_history[0].id, PERSIST_CAP as u64 + 20);
        let loaded = store.load();
        assert_eq!(loaded.document.dice_history.len(), PERSIST_CAP);
    }

    #[test]
    fn save_enforces_player_cap_from_the_front() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut doc = SessionDocument::default();
        for i in 0..(PERSIST_CAP as u64 + 5) {
            doc.players
                .push(Player::new(i + 1, format!("P{i}"), 10, ColorTag::default()));
        }
        store.save(&mut doc).unwrap();

        assert_eq!(doc.players.len(), PERSIST_CAP);
        // The oldest five were evicted; the newest survives.
        assert_eq!(doc.players[0].id, 6);
        assert_eq!(doc.players.last().unwrap().id, PERSIST_CAP as u64 + 5);
    }

    #[test]
    fn reset_deletes_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut doc = SessionDocument::default();
        store.save(&mut doc).unwrap();
        assert!(store.path().exists());

        store.reset().unwrap();
        assert!(!store.path().exists());
        store.reset().unwrap(); // second reset is fine

        let result = store.load();
        assert!(result.document.last_saved.is_none());
    }

    #[test]
    fn partial_document_on_disk_merges_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"settings":{"theme":"dark"}}"#).unwrap();

        let result = store.load();
        assert!(result.warning.is_none());
        assert_eq!(result.document.settings.theme, tisch_core::Theme::Dark);
        assert!(result.document.settings.auto_save);
        assert!(result.document.players.is_empty());
    }
}
