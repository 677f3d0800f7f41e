//! Dice rolling and roll statistics.
//!
//! Pure logic with no storage or UI dependencies: die types, "NdS"
//! expression parsing, rolling against a caller-supplied seeded RNG, and
//! aggregate statistics over a batch of outcomes. Keeping this separate from
//! persistence and rendering lets the math be tested deterministically.

/// Die types: coin, standard polyhedral, and custom side counts.
pub mod die;
/// Error types used throughout the crate.
pub mod error;
/// Roll expressions like "3d6".
pub mod expr;
/// Rolling dice against an RNG.
pub mod roller;
/// Aggregate statistics over roll outcomes.
pub mod stats;

/// Re-export the die type.
pub use die::Die;
/// Re-export error types.
pub use error::{DiceError, DiceResult};
/// Re-export the roll expression type.
pub use expr::RollExpr;
/// Re-export rolling functions.
pub use roller::{roll_many, roll_one};
/// Re-export the aggregate statistics type.
pub use stats::Aggregate;
