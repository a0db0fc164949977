//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. Direction keys
//! do not auto-repeat: a snake keeps moving in its current direction, so a
//! single key press per turn is the whole input model.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
