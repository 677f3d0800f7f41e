//! The append-ordered player roster.

use tisch_core::{ColorTag, CoreError, CoreResult, Player};

/// Fields of a player that can be changed after creation. Absent fields are
/// left untouched.
#[derive(Debug, Clone, Default)]
pub struct PlayerPatch {
    /// New display name.
    pub name: Option<String>,
    /// New hit points. Re-stats the player: `max_hp` follows.
    pub hp: Option<i64>,
    /// New color tag.
    pub color: Option<ColorTag>,
}

impl PlayerPatch {
    /// Whether the patch changes anything at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.hp.is_none() && self.color.is_none()
    }
}

/// Derived statistics over the roster.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterStats {
    /// Number of players.
    pub total: usize,
    /// Players with hp above 0.
    pub alive: usize,
    /// Players at 0 hp.
    pub eliminated: usize,
    /// Players at or below the low-HP threshold.
    pub low_hp: usize,
    /// Sum of current hp over all players.
    pub total_hp: i64,
    /// Mean current hp, rounded to one decimal. Zero for an empty roster.
    pub average_hp: f64,
}

/// An ordered list of players, in creation order.
///
/// Ids are assigned as `max(existing) + 1` (1 for an empty roster), so an id
/// is never reused within a session even after removals.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from previously persisted players, keeping their order.
    pub fn from_players(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// All players, oldest first.
    pub fn list(&self) -> &[Player] {
        &self.players
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the roster has no players.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Look up a player by id.
    pub fn get(&self, id: u64) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    fn next_id(&self) -> u64 {
        self.players.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }

    /// Add a player at full HP, assigning the next id. Returns the new
    /// player.
    ///
    /// Rejects empty names and non-positive hit points without mutating
    /// anything.
    pub fn add(&mut self, name: &str, hp: i64, color: ColorTag) -> CoreResult<Player> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::EmptyName);
        }
        if hp <= 0 {
            return Err(CoreError::NonPositiveHp(hp));
        }

        let player = Player::new(self.next_id(), name, hp, color);
        self.players.push(player.clone());
        Ok(player)
    }

    /// Merge a patch into the matching player and stamp `updated_at`.
    ///
    /// Returns `false` (and changes nothing) when the id is unknown; callers
    /// decide whether to warn. Invalid patch fields are rejected before any
    /// field is applied, and an empty patch leaves the player untouched.
    pub fn update(&mut self, id: u64, patch: PlayerPatch) -> CoreResult<bool> {
        if patch.is_empty() {
            return Ok(self.get(id).is_some());
        }
        if let Some(ref name) = patch.name
            && name.trim().is_empty()
        {
            return Err(CoreError::EmptyName);
        }
        if let Some(hp) = patch.hp
            && hp <= 0
        {
            return Err(CoreError::NonPositiveHp(hp));
        }

        let Some(player) = self.players.iter_mut().find(|p| p.id == id) else {
            return Ok(false);
        };

        if let Some(name) = patch.name {
            player.name = name.trim().to_string();
        }
        if let Some(hp) = patch.hp {
            player.hp = hp;
            player.max_hp = hp;
        }
        if let Some(color) = patch.color {
            player.color = color;
        }
        player.updated_at = Some(chrono::Utc::now());
        Ok(true)
    }

    /// Remove a player by id. Removing an absent id is a silent no-op;
    /// returns whether anything was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.id != id);
        self.players.len() < before
    }

    /// Adjust a player's HP by a signed delta (floored at 0). Returns the
    /// new value, or `None` when the id is unknown.
    pub fn change_hp(&mut self, id: u64, delta: i64) -> Option<i64> {
        self.players
            .iter_mut()
            .find(|p| p.id == id)
            .map(|p| p.change_hp(delta))
    }

    /// Reset one player back to `max_hp`. Returns whether the id was found.
    pub fn reset_hp(&mut self, id: u64) -> bool {
        match self.players.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                p.reset_hp();
                true
            }
            None => false,
        }
    }

    /// Reset every player back to `max_hp`.
    pub fn reset_all(&mut self) {
        for p in &mut self.players {
            p.reset_hp();
        }
    }

    /// Drop the oldest players until at most `max` remain.
    pub fn trim(&mut self, max: usize) {
        if self.players.len() > max {
            let excess = self.players.len() - max;
            self.players.drain(..excess);
        }
    }

    /// Players at 0 HP.
    pub fn eliminated(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| p.is_eliminated()).collect()
    }

    /// Players at or below `threshold` (a fraction of `max_hp`).
    pub fn low_hp(&self, threshold: f64) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.is_low_hp(threshold))
            .collect()
    }

    /// Compute roster statistics.
    pub fn stats(&self) -> RosterStats {
        let total = self.players.len();
        let eliminated = self.eliminated().len();
        let total_hp: i64 = self.players.iter().map(|p| p.hp).sum();
        let average_hp = if total == 0 {
            0.0
        } else {
            (total_hp as f64 / total as f64 * 10.0).round() / 10.0
        };

        RosterStats {
            total,
            alive: total - eliminated,
            eliminated,
            low_hp: self.low_hp(tisch_core::player::LOW_HP_THRESHOLD).len(),
            total_hp,
            average_hp,
        }
    }
}
