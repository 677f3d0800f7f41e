//! Export and import of the full session document.
//!
//! Export writes everything; import takes players and settings but never
//! dice history. The asymmetry is deliberate: re-importing an export into a
//! live session must not duplicate rolls that were already recorded there.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tisch_core::{Player, RollRecord, Settings, Theme};

/// Version stamp written into exports.
pub const EXPORT_VERSION: &str = "1.0.0";

/// The shape [`crate::Session::export_all`] produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    /// The player roster.
    pub players: Vec<Player>,
    /// Roll history, newest first.
    pub dice_history: Vec<RollRecord>,
    /// Session settings.
    pub settings: Settings,
    /// When the export was produced.
    pub exported_at: DateTime<Utc>,
    /// Export format version.
    pub version: String,
}

/// A partial settings object: absent fields leave the current value alone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    /// New theme, if present.
    pub theme: Option<Theme>,
    /// New sounds flag, if present.
    pub sounds: Option<bool>,
    /// New auto-save flag, if present.
    pub auto_save: Option<bool>,
}

impl SettingsPatch {
    /// Overlay the present fields onto `settings`.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        if let Some(sounds) = self.sounds {
            settings.sounds = sounds;
        }
        if let Some(auto_save) = self.auto_save {
            settings.auto_save = auto_save;
        }
    }
}

/// The shape [`crate::Session::import_all`] accepts.
///
/// Both fields are optional; a `diceHistory` key in the payload is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportDocument {
    /// Replacement roster, if present.
    pub players: Option<Vec<Player>>,
    /// Settings overrides, if present.
    pub settings: Option<SettingsPatch>,
}
