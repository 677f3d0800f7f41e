//! Die types: coin, standard polyhedral, and custom side counts.

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};

/// A die to roll.
///
/// `Coin` has two faces and yields 0 (heads) or 1 (tails); every other die
/// yields a value between 1 and its side count. "d2" parses as `Coin`, so
/// two-sided rolls always carry coin semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// A two-faced coin: 0 = heads, 1 = tails.
    Coin,
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
    /// A die with a custom number of sides (at least 3).
    Custom(u32),
}

impl Die {
    /// Returns the number of sides (faces, for the coin).
    pub fn sides(self) -> u32 {
        match self {
            Self::Coin => 2,
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }

    /// Parse a die from a tag like "d20", "coin", or "d30".
    ///
    /// "d2" maps to `Coin`. Custom side counts below 3 are rejected.
    pub fn parse(s: &str) -> DiceResult<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "coin" | "d2" => Ok(Self::Coin),
            "d4" => Ok(Self::D4),
            "d6" => Ok(Self::D6),
            "d8" => Ok(Self::D8),
            "d10" => Ok(Self::D10),
            "d12" => Ok(Self::D12),
            "d20" => Ok(Self::D20),
            "d100" => Ok(Self::D100),
            other => {
                let num = other
                    .strip_prefix('d')
                    .and_then(|n| n.parse::<u32>().ok())
                    .ok_or_else(|| DiceError::InvalidExpr(other.to_string()))?;
                if num >= 3 {
                    Ok(Self::Custom(num))
                } else {
                    Err(DiceError::TooFewSides(num))
                }
            }
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Coin => write!(f, "coin"),
            Self::Custom(n) => write!(f, "d{n}"),
            other => write!(f, "d{}", other.sides()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides() {
        assert_eq!(Die::Coin.sides(), 2);
        assert_eq!(Die::D4.sides(), 4);
        assert_eq!(Die::D6.sides(), 6);
        assert_eq!(Die::D8.sides(), 8);
        assert_eq!(Die::D10.sides(), 10);
        assert_eq!(Die::D12.sides(), 12);
        assert_eq!(Die::D20.sides(), 20);
        assert_eq!(Die::D100.sides(), 100);
        assert_eq!(Die::Custom(30).sides(), 30);
    }

    #[test]
    fn parse_standard() {
        assert_eq!(Die::parse("d20").unwrap(), Die::D20);
        assert_eq!(Die::parse("D6").unwrap(), Die::D6);
        assert_eq!(Die::parse("d100").unwrap(), Die::D100);
        assert_eq!(Die::parse("d30").unwrap(), Die::Custom(30));
    }

    #[test]
    fn parse_coin() {
        assert_eq!(Die::parse("coin").unwrap(), Die::Coin);
        assert_eq!(Die::parse("d2").unwrap(), Die::Coin);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(Die::parse("d1"), Err(DiceError::TooFewSides(1)));
        assert_eq!(Die::parse("d0"), Err(DiceError::TooFewSides(0)));
        assert!(matches!(Die::parse("foo"), Err(DiceError::InvalidExpr(_))));
        assert!(matches!(Die::parse(""), Err(DiceError::InvalidExpr(_))));
    }

    #[test]
    fn display() {
        assert_eq!(Die::D20.to_string(), "d20");
        assert_eq!(Die::Coin.to_string(), "coin");
        assert_eq!(Die::Custom(30).to_string(), "d30");
    }
}
