//! Error types for the session layer.

use thiserror::Error;

/// Alias for `Result<T, SessionError>`.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while driving a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Invalid entity data from the user.
    #[error("{0}")]
    Core(#[from] tisch_core::CoreError),

    /// Invalid dice input from the user.
    #[error("{0}")]
    Dice(#[from] tisch_dice::DiceError),

    /// The store could not persist the document.
    #[error("{0}")]
    Store(#[from] tisch_store::StoreError),

    /// No player with the given id.
    #[error("no player with id {0}")]
    PlayerNotFound(u64),

    /// A command was recognized but its arguments were not.
    #[error("{0}")]
    Usage(String),

    /// Input that matched no command.
    #[error("unknown command: {0} (try 'help')")]
    UnknownCommand(String),

    /// An import payload could not be parsed; nothing was changed.
    #[error("import failed: {0}")]
    Import(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            SessionError::PlayerNotFound(7).to_string(),
            "no player with id 7"
        );
        assert_eq!(
            SessionError::UnknownCommand("dance".into()).to_string(),
            "unknown command: dance (try 'help')"
        );
        assert!(
            SessionError::Import("bad json".into())
                .to_string()
                .starts_with("import failed")
        );
    }
}
