//! Recorded dice rolls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded roll of a batch of identical dice.
///
/// The record stores the die as its display tag ("d6", "coin") plus its side
/// count, matching the persisted document shape. By construction
/// `outcomes.len() == quantity` and `total` is the sum of `outcomes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollRecord {
    /// Unique integer id, assigned by the history, never reused in a session.
    pub id: u64,
    /// Die display tag, e.g. "d6" or "coin".
    pub die: String,
    /// Number of sides on the die rolled.
    pub sides: u32,
    /// How many dice were rolled.
    pub quantity: u32,
    /// Individual outcomes, in the order they were generated.
    pub outcomes: Vec<u32>,
    /// Sum of all outcomes.
    pub total: u64,
    /// When the roll happened.
    pub rolled_at: DateTime<Utc>,
}

impl RollRecord {
    /// Build a record from a batch of outcomes, deriving quantity and total.
    pub fn new(id: u64, die: impl Into<String>, sides: u32, outcomes: Vec<u32>) -> Self {
        let total = outcomes.iter().map(|&v| u64::from(v)).sum();
        Self {
            id,
            die: die.into(),
            sides,
            quantity: outcomes.len() as u32,
            outcomes,
            total,
            rolled_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for RollRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.outcomes.iter().map(|v| v.to_string()).collect();
        write!(
            f,
            "{}{}: [{}] = {}",
            self.quantity,
            self.die,
            values.join(", "),
            self.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_quantity_and_total() {
        let r = RollRecord::new(1, "d6", 6, vec![3, 1, 6, 6, 2]);
        assert_eq!(r.quantity, 5);
        assert_eq!(r.total, 18);
        assert_eq!(r.outcomes.len() as u32, r.quantity);
    }

    #[test]
    fn empty_outcomes() {
        let r = RollRecord::new(1, "d20", 20, vec![]);
        assert_eq!(r.quantity, 0);
        assert_eq!(r.total, 0);
    }

    #[test]
    fn display() {
        let r = RollRecord::new(3, "d6", 6, vec![2, 5]);
        assert_eq!(r.to_string(), "2d6: [2, 5] = 7");
    }

    #[test]
    fn serde_roundtrip() {
        let r = RollRecord::new(7, "coin", 2, vec![0, 1, 1]);
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"rolledAt\""));
        let r2: RollRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(r2.id, 7);
        assert_eq!(r2.outcomes, vec![0, 1, 1]);
        assert_eq!(r2.total, 2);
    }
}
