//! Record types persisted by the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The local player's identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl Player {
    /// A fresh anonymous identity with a `Player_NNNN` display name.
    pub fn anonymous() -> Self {
        let id = Uuid::new_v4();
        // Derive the display tag from the id so no extra RNG is needed.
        let bytes = id.as_bytes();
        let tag = u16::from_le_bytes([bytes[0], bytes[1]]) % 10_000;
        Self {
            id,
            username: format!("Player_{tag:04}"),
            created_at: Utc::now(),
        }
    }
}

/// One finished game's final score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub id: Uuid,
    pub player_id: Uuid,
    /// Denormalized display name, kept in sync on rename.
    pub username: String,
    pub score: u32,
    pub created_at: DateTime<Utc>,
}

/// Player preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub sound_enabled: bool,
    pub music_enabled: bool,
    pub dark_mode: bool,
    pub updated_at: DateTime<Utc>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            music_enabled: true,
            dark_mode: false,
            updated_at: Utc::now(),
        }
    }
}

/// Partial settings update; `None` fields are left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub sound_enabled: Option<bool>,
    pub music_enabled: Option<bool>,
    pub dark_mode: Option<bool>,
}

impl SettingsPatch {
    pub fn sound(value: bool) -> Self {
        Self {
            sound_enabled: Some(value),
            ..Self::default()
        }
    }

    pub fn music(value: bool) -> Self {
        Self {
            music_enabled: Some(value),
            ..Self::default()
        }
    }

    pub fn dark_mode(value: bool) -> Self {
        Self {
            dark_mode: Some(value),
            ..Self::default()
        }
    }
}
