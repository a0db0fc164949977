//! The JSON-document store behind the profile, scores, and settings.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::records::{Player, ScoreRecord, Settings, SettingsPatch};

/// Environment variable overriding the store file location.
pub const STORE_PATH_ENV: &str = "SNAKE_STORE_PATH";

/// Default store file name (in the working directory).
pub const DEFAULT_STORE_FILE: &str = "snake_store.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreData {
    player: Player,
    settings: Settings,
    scores: Vec<ScoreRecord>,
}

impl StoreData {
    fn fresh() -> Self {
        Self {
            player: Player::anonymous(),
            settings: Settings::default(),
            scores: Vec::new(),
        }
    }
}

/// Single-document persistence for player, scores, and settings.
///
/// A store without a path (see [`Store::in_memory`]) keeps everything in
/// memory only; it is the fallback when the data file cannot be used.
#[derive(Debug)]
pub struct Store {
    path: Option<PathBuf>,
    data: StoreData,
}

impl Store {
    /// Resolve the store location from `SNAKE_STORE_PATH` or the default.
    pub fn default_path() -> PathBuf {
        env::var_os(STORE_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE))
    }

    /// Load the store from `path`, creating a fresh profile on first run.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        match fs::read_to_string(&path) {
            Ok(raw) => {
                let data: StoreData = serde_json::from_str(&raw)
                    .with_context(|| format!("malformed store file {}", path.display()))?;
                debug!(
                    path = %path.display(),
                    scores = data.scores.len(),
                    "loaded store"
                );
                Ok(Self {
                    path: Some(path),
                    data,
                })
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                let store = Self {
                    path: Some(path),
                    data: StoreData::fresh(),
                };
                info!(username = %store.data.player.username, "created anonymous player");
                store.save()?;
                Ok(store)
            }
            Err(err) => {
                Err(err).with_context(|| format!("cannot read store file {}", path.display()))
            }
        }
    }

    /// A store that never touches disk (fallback when `open` fails).
    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: StoreData::fresh(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn player(&self) -> &Player {
        &self.data.player
    }

    /// Rename the player. Score rows carry the display name, so they are
    /// updated too (the hosted original resolved names through a join).
    pub fn set_username(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            bail!("username cannot be empty");
        }

        self.data.player.username = name.to_string();
        let player_id = self.data.player.id;
        for record in &mut self.data.scores {
            if record.player_id == player_id {
                record.username = name.to_string();
            }
        }
        self.save()
    }

    /// Append a finished game's score and persist it.
    pub fn record_score(&mut self, score: u32) -> Result<ScoreRecord> {
        let record = ScoreRecord {
            id: Uuid::new_v4(),
            player_id: self.data.player.id,
            username: self.data.player.username.clone(),
            score,
            created_at: Utc::now(),
        };
        self.data.scores.push(record.clone());
        self.save()?;
        debug!(score, "recorded score");
        Ok(record)
    }

    /// The player's best score; 0 when no record exists.
    pub fn best_score(&self) -> u32 {
        let player_id = self.data.player.id;
        self.data
            .scores
            .iter()
            .filter(|r| r.player_id == player_id)
            .map(|r| r.score)
            .max()
            .unwrap_or(0)
    }

    /// Top scores, highest first; ties resolved by earliest record.
    pub fn top_scores(&self, limit: usize) -> Vec<&ScoreRecord> {
        let mut rows: Vec<&ScoreRecord> = self.data.scores.iter().collect();
        rows.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.created_at.cmp(&b.created_at))
        });
        rows.truncate(limit);
        rows
    }

    pub fn settings(&self) -> &Settings {
        &self.data.settings
    }

    /// Apply a partial settings update.
    ///
    /// The in-memory value is updated even if the disk write fails, matching
    /// the optimistic toggle behavior of the settings screen.
    pub fn update_settings(&mut self, patch: SettingsPatch) -> Result<Settings> {
        let settings = &mut self.data.settings;
        if let Some(sound) = patch.sound_enabled {
            settings.sound_enabled = sound;
        }
        if let Some(music) = patch.music_enabled {
            settings.music_enabled = music;
        }
        if let Some(dark) = patch.dark_mode {
            settings.dark_mode = dark;
        }
        settings.updated_at = Utc::now();

        let updated = settings.clone();
        self.save()?;
        Ok(updated)
    }

    fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let raw = serde_json::to_string_pretty(&self.data).context("serialize store")?;
        fs::write(path, raw)
            .with_context(|| format!("cannot write store file {}", path.display()))?;
        Ok(())
    }
}
