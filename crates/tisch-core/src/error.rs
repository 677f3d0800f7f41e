/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Validation errors for user-supplied entity data.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A player name was empty or whitespace-only.
    #[error("player name cannot be empty")]
    EmptyName,

    /// Hit points must be positive when creating or re-statting a player.
    #[error("hit points must be greater than 0, got {0}")]
    NonPositiveHp(i64),

    /// An unknown color tag string.
    #[error("unknown color tag: \"{0}\"")]
    InvalidColor(String),

    /// An unknown theme string.
    #[error("unknown theme: \"{0}\"")]
    InvalidTheme(String),
}
