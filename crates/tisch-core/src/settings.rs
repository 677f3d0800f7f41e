//! User-tunable session settings.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Visual theme for front-ends that render one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// The default parchment-and-iron look.
    #[default]
    Medieval,
    /// Dark mode.
    Dark,
    /// Light mode.
    Light,
}

impl Theme {
    /// Parse a theme from its lowercase string form.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s.trim().to_lowercase().as_str() {
            "medieval" => Ok(Self::Medieval),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(CoreError::InvalidTheme(other.to_string())),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Medieval => write!(f, "medieval"),
            Self::Dark => write!(f, "dark"),
            Self::Light => write!(f, "light"),
        }
    }
}

/// Session settings persisted alongside the entity collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Visual theme.
    pub theme: Theme,
    /// Whether front-ends should play sounds.
    pub sounds: bool,
    /// Whether every mutation persists immediately.
    pub auto_save: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Medieval,
            sounds: true,
            auto_save: true,
        }
    }
}
