/// Alias for `Result<T, DiceError>`.
pub type DiceResult<T> = Result<T, DiceError>;

/// Errors from parsing and validating dice input.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// The expression was not of the form "NdS", "dS", or "coin".
    #[error("invalid roll expression: \"{0}\" (expected e.g. \"3d6\", \"d20\", \"coin\")")]
    InvalidExpr(String),

    /// A die must have at least 2 sides.
    #[error("a die needs at least 2 sides, got {0}")]
    TooFewSides(u32),

    /// Roll quantity must be at least 1.
    #[error("roll quantity must be greater than 0")]
    ZeroQuantity,
}
