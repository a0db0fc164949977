//! Player profile, score, and settings persistence.
//!
//! The game engine emits a final score once per completed game and otherwise
//! knows nothing about persistence; this crate is the collaborator that keeps
//! the player's identity, score history, and settings across runs.
//!
//! Everything lives in one JSON document on disk, loaded at startup and
//! written through on each mutation. Failures are ordinary [`anyhow`] errors:
//! callers log them and keep playing, they never roll back game state.
//!
//! # Operations
//!
//! - anonymous player identity (created on first run, renameable)
//! - `record_score` / `best_score` (0 when no record exists)
//! - `top_scores` for the leaderboard screen
//! - `settings` / `update_settings` with partial-update semantics

pub mod records;
pub mod store;

pub use records::{Player, ScoreRecord, Settings, SettingsPatch};
pub use store::{Store, DEFAULT_STORE_FILE, STORE_PATH_ENV};
