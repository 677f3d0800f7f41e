//! Application context and command dispatch for Tischrunde.
//!
//! A [`Session`] owns the store, roster, history, settings, and RNG as one
//! explicit service object constructed at startup — no globals. Thin UI
//! adapters feed user input into [`Session::process`] and print whatever
//! comes back; everything below that line is testable without a terminal.

/// Session construction options.
pub mod config;
/// Error types used throughout the crate.
pub mod error;
/// The session service object and its command dispatch.
pub mod session;
/// Export and import of the full session document.
pub mod transfer;

/// Re-export the config type.
pub use config::SessionConfig;
/// Re-export error types.
pub use error::{SessionError, SessionResult};
/// Re-export the session type.
pub use session::Session;
/// Re-export transfer types.
pub use transfer::{EXPORT_VERSION, ExportDocument, ImportDocument, SettingsPatch};
