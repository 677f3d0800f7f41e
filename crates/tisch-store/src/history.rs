//! Newest-first, size-bounded dice roll history.

use std::collections::BTreeMap;

use tisch_core::RollRecord;

/// Maximum number of roll records kept in memory.
pub const HISTORY_CAP: usize = 50;

/// A prepend-ordered list of roll records: index 0 is the newest roll.
///
/// The list is capped at [`HISTORY_CAP`] entries; recording past the cap
/// evicts the oldest records from the tail. Ids are assigned as
/// `max(existing) + 1`, and since the newest record always survives
/// eviction the sequence stays monotonic for the whole session.
#[derive(Debug, Clone, Default)]
pub struct History {
    rolls: Vec<RollRecord>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from previously persisted records (newest first),
    /// applying the in-memory cap.
    pub fn from_records(rolls: Vec<RollRecord>) -> Self {
        let mut history = Self { rolls };
        history.trim(HISTORY_CAP);
        history
    }

    /// All records, newest first.
    pub fn list(&self) -> &[RollRecord] {
        &self.rolls
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    fn next_id(&self) -> u64 {
        self.rolls.iter().map(|r| r.id).max().unwrap_or(0) + 1
    }

    /// Record a roll: assign the next id, prepend, evict past the cap.
    /// Returns the new record.
    pub fn record(&mut self, die: &str, sides: u32, outcomes: Vec<u32>) -> &RollRecord {
        let record = RollRecord::new(self.next_id(), die, sides, outcomes);
        self.rolls.insert(0, record);
        self.trim(HISTORY_CAP);
        &self.rolls[0]
    }

    /// Drop the oldest records (from the tail) until at most `max` remain.
    pub fn trim(&mut self, max: usize) {
        if self.rolls.len() > max {
            self.rolls.truncate(max);
        }
    }

    /// Forget all records.
    pub fn clear(&mut self) {
        self.rolls.clear();
    }

    /// The die tag rolled most often, or `None` for an empty history.
    /// Ties go to the tag that sorts first.
    pub fn most_used_die(&self) -> Option<&str> {
        let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
        for roll in &self.rolls {
            *counts.entry(roll.die.as_str()).or_insert(0) += 1;
        }

        let mut best: Option<(&str, u32)> = None;
        for (die, count) in counts {
            if best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((die, count));
            }
        }
        best.map(|(die, _)| die)
    }

    /// Sum of the totals of every recorded roll.
    pub fn grand_total(&self) -> u64 {
        self.rolls.iter().map(|r| r.total).sum()
    }
}
