//! Persistent session document store and bounded entity collections.
//!
//! The [`Store`] keeps one JSON document on disk and never fails to load —
//! missing or corrupt files fall back to defaults. The [`Roster`] and
//! [`History`] collections own the in-memory entities during a session and
//! reconcile by rewriting the whole document on each save (no incremental
//! patching; a lone writer is assumed, concurrent writers are
//! last-write-wins).

/// Error types used throughout the crate.
pub mod error;
/// Newest-first, size-bounded dice roll history.
pub mod history;
/// The append-ordered player roster.
pub mod roster;
/// The on-disk JSON document store.
pub mod store;

/// Re-export error types.
pub use error::{StoreError, StoreResult};
/// Re-export the roll history and its in-memory cap.
pub use history::{HISTORY_CAP, History};
/// Re-export the roster and its derived statistics.
pub use roster::{PlayerPatch, Roster, RosterStats};
/// Re-export the store and its load result.
pub use store::{LoadResult, PERSIST_CAP, Store};
