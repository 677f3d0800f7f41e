//! Player entities and their HP tracking.
//!
//! A player's HP is floored at zero but may exceed `max_hp` — overhealing is
//! legal and rendered with an "exceeded" indicator by consumers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Default low-HP threshold as a fraction of `max_hp`.
pub const LOW_HP_THRESHOLD: f64 = 0.25;

/// One of the six card color gradients a player can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorTag {
    /// Red to orange gradient.
    #[default]
    RedOrange,
    /// Green to brown gradient.
    GreenBrown,
    /// Turquoise to blue gradient.
    TurquoiseBlue,
    /// Violet to pink gradient.
    VioletPink,
    /// Gold to bronze gradient.
    GoldBronze,
    /// Silver to grey gradient.
    SilverGrey,
}

impl ColorTag {
    /// All color tags, in the order they are offered to users.
    pub const ALL: [Self; 6] = [
        Self::RedOrange,
        Self::GreenBrown,
        Self::TurquoiseBlue,
        Self::VioletPink,
        Self::GoldBronze,
        Self::SilverGrey,
    ];

    /// Parse a color tag from its kebab-case string form.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s.trim().to_lowercase().as_str() {
            "red-orange" => Ok(Self::RedOrange),
            "green-brown" => Ok(Self::GreenBrown),
            "turquoise-blue" => Ok(Self::TurquoiseBlue),
            "violet-pink" => Ok(Self::VioletPink),
            "gold-bronze" => Ok(Self::GoldBronze),
            "silver-grey" => Ok(Self::SilverGrey),
            other => Err(CoreError::InvalidColor(other.to_string())),
        }
    }
}

impl std::fmt::Display for ColorTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::RedOrange => "red-orange",
            Self::GreenBrown => "green-brown",
            Self::TurquoiseBlue => "turquoise-blue",
            Self::VioletPink => "violet-pink",
            Self::GoldBronze => "gold-bronze",
            Self::SilverGrey => "silver-grey",
        };
        write!(f, "{s}")
    }
}

/// A player in the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Unique integer id, assigned by the roster, never reused in a session.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Current hit points. Never below 0, may exceed `max_hp`.
    pub hp: i64,
    /// Maximum hit points, the reset target.
    pub max_hp: i64,
    /// Card color gradient.
    #[serde(default)]
    pub color: ColorTag,
    /// When the player was created. Imported records without a stamp get
    /// the import time.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// When the player was last mutated, if ever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Player {
    /// Create a new player at full HP. The caller validates name and hp.
    pub fn new(id: u64, name: impl Into<String>, hp: i64, color: ColorTag) -> Self {
        Self {
            id,
            name: name.into(),
            hp,
            max_hp: hp,
            color,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Adjust HP by a signed delta, flooring at 0. Returns the new value.
    ///
    /// There is no upper clamp: going past `max_hp` is allowed. Extreme
    /// deltas saturate instead of overflowing.
    pub fn change_hp(&mut self, delta: i64) -> i64 {
        self.hp = self.hp.saturating_add(delta).max(0);
        self.updated_at = Some(Utc::now());
        self.hp
    }

    /// Reset HP back to `max_hp`.
    pub fn reset_hp(&mut self) {
        self.hp = self.max_hp;
        self.updated_at = Some(Utc::now());
    }

    /// Whether the player has dropped to 0 HP.
    pub fn is_eliminated(&self) -> bool {
        self.hp == 0
    }

    /// Whether current HP exceeds the maximum (overhealed).
    pub fn hp_exceeded(&self) -> bool {
        self.hp > self.max_hp
    }

    /// Whether HP is at or below the given fraction of `max_hp`.
    pub fn is_low_hp(&self, threshold: f64) -> bool {
        self.hp as f64 <= self.max_hp as f64 * threshold
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}/{}", self.name, self.hp, self.max_hp)?;
        if self.hp_exceeded() {
            write!(f, " (exceeded)")?;
        }
        Ok(())
    }
}
