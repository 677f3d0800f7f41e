//! The persisted session document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::player::Player;
use crate::roll::RollRecord;
use crate::settings::Settings;

/// The single JSON document a session persists.
///
/// Every field carries a serde default, so loading an older or partial
/// document shallow-merges it over [`SessionDocument::default`]: stored keys
/// override defaults, missing keys fall back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionDocument {
    /// The player roster, in creation order.
    pub players: Vec<Player>,
    /// Roll history, newest first.
    pub dice_history: Vec<RollRecord>,
    /// Session settings.
    pub settings: Settings,
    /// When the document was last written, stamped by the store on save.
    pub last_saved: Option<DateTime<Utc>>,
}

impl SessionDocument {
    /// Parse a document from JSON text, merging over defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Serialize the document as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
