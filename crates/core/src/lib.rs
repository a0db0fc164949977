//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical food sequences
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for game tick processing
//!
//! # Module Structure
//!
//! - [`game_state`]: Complete game state and the tick/turn/pause/restart rules
//! - [`snake`]: The snake body as a fixed-capacity cell sequence
//! - [`rng`]: Seeded LCG used for food placement
//! - [`snapshot`]: Value-type state export for rendering and observers
//!
//! # Game Rules
//!
//! Classic Snake on a 15x15 grid:
//!
//! - The snake advances one cell per 150ms tick in its current direction
//! - A direction request that exactly reverses the current direction is ignored
//! - Hitting a wall or any body cell is the terminal game-over transition
//! - Eating food grows the snake by one segment and awards 10 points
//! - Food respawns uniformly over the free cells (never on the snake)
//!
//! # Example
//!
//! ```
//! use tui_snake_core::GameState;
//! use tui_snake_types::{Direction, TickOutcome};
//!
//! let mut game = GameState::new(12345);
//!
//! game.set_direction(Direction::Down);
//! let outcome = game.tick();
//! assert_ne!(outcome, TickOutcome::Idle);
//! assert_eq!(game.snake().len(), 1);
//! ```
//!
//! Call [`GameState::tick`](game_state::GameState::tick) once per fixed period
//! while the game is neither paused nor over.

pub mod game_state;
pub mod rng;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use rng::SimpleRng;
pub use snake::Snake;
pub use snapshot::{GameSnapshot, CELL_BODY, CELL_EMPTY, CELL_FOOD, CELL_HEAD};
