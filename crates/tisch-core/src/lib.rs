//! Core types for Tischrunde: players, roll records, settings, and the
//! session document.
//!
//! This crate defines the data model that the store persists and the session
//! mutates. It is independent of any storage backend or UI — you can
//! construct a [`SessionDocument`] programmatically or deserialize one from
//! JSON.

/// The persisted session document and its merge-over-defaults semantics.
pub mod document;
/// Error types used throughout the crate.
pub mod error;
/// Player entities and their HP tracking.
pub mod player;
/// Recorded dice rolls.
pub mod roll;
/// User-tunable session settings.
pub mod settings;

/// Re-export the document type.
pub use document::SessionDocument;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export player types.
pub use player::{ColorTag, Player};
/// Re-export roll record types.
pub use roll::RollRecord;
/// Re-export settings types.
pub use settings::{Settings, Theme};
