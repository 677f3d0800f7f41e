//! Aggregate statistics over roll outcomes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Derived statistics for a batch of outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    /// Sum of all outcomes.
    pub total: u64,
    /// Mean outcome, rounded to two decimals.
    pub average: f64,
    /// Lowest outcome.
    pub min: u32,
    /// Highest outcome.
    pub max: u32,
    /// Occurrence count per outcome value, in ascending value order.
    pub histogram: BTreeMap<u32, u32>,
}

impl Aggregate {
    /// Compute statistics over a batch of outcomes.
    ///
    /// Returns `None` for an empty batch, so the average is never NaN.
    pub fn from_outcomes(outcomes: &[u32]) -> Option<Self> {
        if outcomes.is_empty() {
            return None;
        }

        let total: u64 = outcomes.iter().map(|&v| u64::from(v)).sum();
        let average = (total as f64 / outcomes.len() as f64 * 100.0).round() / 100.0;

        let mut histogram = BTreeMap::new();
        for &v in outcomes {
            *histogram.entry(v).or_insert(0) += 1;
        }

        Some(Self {
            total,
            average,
            min: *outcomes.iter().min().unwrap_or(&0),
            max: *outcomes.iter().max().unwrap_or(&0),
            histogram,
        })
    }
}

impl std::fmt::Display for Aggregate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "total {} | avg {:.2} | min {} | max {}",
            self.total, self.average, self.min, self.max
        )
    }
}
