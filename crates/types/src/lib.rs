//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, UI rendering, persistence).
//!
//! # Grid
//!
//! The playing field is a square grid:
//!
//! - **Side length**: 15 cells (indexed 0-14 on both axes)
//! - **Origin**: top-left, `y` grows downward
//! - **Spawn position**: (7, 7), the grid center
//!
//! # Game Timing
//!
//! The simulation advances on a fixed 150ms tick (`TICK_MS`). One tick moves
//! the snake by exactly one cell; there is no sub-tick interpolation.
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Point, GRID_SIZE};
//!
//! let head = Point::new(7, 7);
//! let next = head.step(Direction::Right);
//! assert_eq!(next, Point::new(8, 7));
//! assert!(next.in_bounds());
//!
//! // Opposite directions are recognized (used to reject 180° turns)
//! assert!(Direction::Left.is_opposite(Direction::Right));
//! assert_eq!(GRID_SIZE, 15);
//! ```

/// Grid side length in cells (the field is GRID_SIZE x GRID_SIZE)
pub const GRID_SIZE: u8 = 15;

/// Total number of grid cells (also the maximum possible snake length)
pub const GRID_CELLS: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Fixed simulation step interval in milliseconds
pub const TICK_MS: u32 = 150;

/// Score awarded for each food eaten
pub const FOOD_SCORE: u32 = 10;

/// Snake spawn cell (grid center)
pub const SPAWN_POINT: Point = Point::new(7, 7);

/// Number of entries shown on the leaderboard screen
pub const LEADERBOARD_LIMIT: usize = 10;

/// A cell coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i8,
    pub y: i8,
}

impl Point {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// The adjacent cell in the given direction.
    ///
    /// The result may be out of bounds; callers check with [`Point::in_bounds`].
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether this cell lies on the grid.
    pub fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < GRID_SIZE as i8 && self.y >= 0 && self.y < GRID_SIZE as i8
    }
}

/// Snake movement direction, as a unit delta on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit delta vector (dx, dy). `y` grows downward.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The 180° reverse of this direction.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Whether `other` is the exact reverse of this direction.
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Request a direction change (applied on the next tick).
    Turn(Direction),
    /// Flip the pause flag.
    TogglePause,
    /// Reset to a fresh game.
    Restart,
}

/// Result classification of a single simulation step.
///
/// This is an outcome, not an error: game over is the designed terminal
/// transition of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The engine was paused or already terminal; nothing was mutated.
    Idle,
    /// The snake advanced one cell without eating.
    Moved,
    /// The snake ate food: it grew by one segment and food was resampled.
    AteFood,
    /// The snake hit a wall or itself; the state is now terminal.
    GameOver,
}

/// Top-level screens of the client (game, leaderboard, settings).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Game,
    Leaderboard,
    Settings,
}

impl Screen {
    /// Cycle to the next screen (Tab key order).
    pub fn next(self) -> Self {
        match self {
            Screen::Game => Screen::Leaderboard,
            Screen::Leaderboard => Screen::Settings,
            Screen::Settings => Screen::Game,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_step() {
        let p = Point::new(5, 5);
        assert_eq!(p.step(Direction::Up), Point::new(5, 4));
        assert_eq!(p.step(Direction::Down), Point::new(5, 6));
        assert_eq!(p.step(Direction::Left), Point::new(4, 5));
        assert_eq!(p.step(Direction::Right), Point::new(6, 5));
    }

    #[test]
    fn test_point_in_bounds() {
        assert!(Point::new(0, 0).in_bounds());
        assert!(Point::new(14, 14).in_bounds());
        assert!(!Point::new(-1, 0).in_bounds());
        assert!(!Point::new(15, 0).in_bounds());
        assert!(!Point::new(0, 15).in_bounds());
    }

    #[test]
    fn test_direction_opposites() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Right.is_opposite(Direction::Right));
    }

    #[test]
    fn test_delta_is_unit_length() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn test_screen_cycle_returns_home() {
        let mut screen = Screen::Game;
        screen = screen.next();
        assert_eq!(screen, Screen::Leaderboard);
        screen = screen.next();
        assert_eq!(screen, Screen::Settings);
        screen = screen.next();
        assert_eq!(screen, Screen::Game);
    }

    #[test]
    fn test_spawn_point_is_grid_center() {
        assert_eq!(SPAWN_POINT, Point::new(7, 7));
        assert!(SPAWN_POINT.in_bounds());
    }
}
