//! Game state module - manages the complete game state
//!
//! This module ties together the snake body, food placement, direction
//! handling, scoring, and the game lifecycle. All mutation happens through
//! four operations: `start`, `tick`, `set_direction`, and `toggle_pause`,
//! which makes the simulation deterministic and testable without a UI host.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::snapshot::{GameSnapshot, CELL_BODY, CELL_FOOD, CELL_HEAD};
use crate::types::{
    Direction, GameAction, Point, TickOutcome, FOOD_SCORE, GRID_CELLS, GRID_SIZE, SPAWN_POINT,
};

/// Complete game state
///
/// The state machine has three states: Running, Paused, and GameOver.
/// `toggle_pause` flips Running <-> Paused, a colliding `tick` enters the
/// terminal GameOver state, and only `start` leaves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    snake: Snake,
    /// `None` only when the snake fills the whole grid (terminal state).
    food: Option<Point>,
    direction: Direction,
    score: u32,
    paused: bool,
    game_over: bool,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    rng: SimpleRng,
}

impl GameState {
    /// Create a ready-to-play game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut state = Self {
            snake: Snake::spawn(SPAWN_POINT),
            food: None,
            direction: Direction::Right,
            score: 0,
            paused: false,
            game_over: false,
            episode_id: 0,
            rng: SimpleRng::new(seed),
        };
        state.food = state.sample_food();
        state
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Current RNG state (for restarting with the same food sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }

    /// Reset to initial lifecycle values, regardless of prior state.
    ///
    /// The RNG state is carried over so consecutive games see different food
    /// sequences; `episode_id` increments so observers can tell games apart.
    pub fn start(&mut self) {
        self.snake = Snake::spawn(SPAWN_POINT);
        self.direction = Direction::Right;
        self.score = 0;
        self.paused = false;
        self.game_over = false;
        self.food = self.sample_food();
        self.episode_id = self.episode_id.wrapping_add(1);
    }

    /// Request a direction change, effective on the next tick.
    ///
    /// A request that exactly reverses the current direction is silently
    /// dropped: an instant 180° turn would always kill a snake of length >= 2,
    /// so rejection is game policy, not an error.
    pub fn set_direction(&mut self, requested: Direction) {
        if requested.is_opposite(self.direction) {
            return;
        }
        self.direction = requested;
    }

    /// Flip the pause flag. Pausing mutates nothing else.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Advance the simulation by one step.
    ///
    /// Hosts call this on a fixed 150ms timer while the game is running; a
    /// defensive call while paused or terminal is a no-op returning
    /// [`TickOutcome::Idle`].
    pub fn tick(&mut self) -> TickOutcome {
        if self.paused || self.game_over {
            return TickOutcome::Idle;
        }

        let new_head = self.snake.head().step(self.direction);

        // The full pre-move body counts: entering the cell the tail is about
        // to vacate is still a collision.
        if !new_head.in_bounds() || self.snake.contains(new_head) {
            self.game_over = true;
            return TickOutcome::GameOver;
        }

        let ate = self.food == Some(new_head);
        self.snake.advance(new_head, ate);

        if !ate {
            return TickOutcome::Moved;
        }

        self.score += FOOD_SCORE;
        // Resample after growth so food can never land under the new head.
        self.food = self.sample_food();
        if self.food.is_none() {
            // The snake fills the grid; nothing left to eat.
            self.game_over = true;
            return TickOutcome::GameOver;
        }
        TickOutcome::AteFood
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::Turn(direction) => self.set_direction(direction),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Restart => self.start(),
        }
    }

    /// Draw a food cell uniformly from the free-cell complement set.
    ///
    /// Enumerating the free cells (instead of rejection sampling) bounds the
    /// work even when the snake approaches grid capacity. Returns `None` when
    /// no free cell exists.
    fn sample_food(&mut self) -> Option<Point> {
        let mut free: ArrayVec<Point, GRID_CELLS> = ArrayVec::new();
        for y in 0..GRID_SIZE as i8 {
            for x in 0..GRID_SIZE as i8 {
                let cell = Point::new(x, y);
                if !self.snake.contains(cell) {
                    free.push(cell);
                }
            }
        }

        if free.is_empty() {
            return None;
        }
        let idx = self.rng.next_range(free.len() as u32) as usize;
        Some(free[idx])
    }

    /// Export the state into an existing snapshot (allocation-free).
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();

        for &cell in self.snake.cells() {
            out.grid[cell.y as usize][cell.x as usize] = CELL_BODY;
        }
        let head = self.snake.head();
        out.grid[head.y as usize][head.x as usize] = CELL_HEAD;
        if let Some(food) = self.food {
            out.grid[food.y as usize][food.x as usize] = CELL_FOOD;
        }

        out.head = head;
        out.food = self.food;
        out.direction = self.direction;
        out.snake_len = self.snake.len() as u32;
        out.score = self.score;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
        out.seed = self.rng.state();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
