//! Roll expressions like "3d6".

use serde::{Deserialize, Serialize};

use crate::die::Die;
use crate::error::{DiceError, DiceResult};

/// A validated roll request: how many of which die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollExpr {
    /// How many dice to roll, at least 1.
    pub quantity: u32,
    /// The die to roll.
    pub die: Die,
}

impl RollExpr {
    /// Build an expression, rejecting a zero quantity.
    pub fn new(quantity: u32, die: Die) -> DiceResult<Self> {
        if quantity == 0 {
            return Err(DiceError::ZeroQuantity);
        }
        Ok(Self { quantity, die })
    }

    /// Parse an expression like "3d6", "d20" (quantity 1), or "coin".
    pub fn parse(s: &str) -> DiceResult<Self> {
        let s = s.trim().to_lowercase();
        if s.is_empty() {
            return Err(DiceError::InvalidExpr(s));
        }

        // A bare die tag means one die.
        if let Ok(die) = Die::parse(&s) {
            return Self::new(1, die);
        }
        // Reject here so "0d6" reports the quantity, not a parse failure.
        if let Some(rest) = s.strip_prefix("0d")
            && rest.parse::<u32>().is_ok()
        {
            return Err(DiceError::ZeroQuantity);
        }

        let split = s
            .find(['d', 'c'])
            .ok_or_else(|| DiceError::InvalidExpr(s.clone()))?;
        let (count, tag) = s.split_at(split);
        let quantity = count
            .parse::<u32>()
            .map_err(|_| DiceError::InvalidExpr(s.clone()))?;
        let die = Die::parse(tag).map_err(|e| match e {
            DiceError::InvalidExpr(_) => DiceError::InvalidExpr(s.clone()),
            other => other,
        })?;
        Self::new(quantity, die)
    }
}

impl std::fmt::Display for RollExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.quantity, self.die)
    }
}
