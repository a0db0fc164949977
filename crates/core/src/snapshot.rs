use crate::types::{Direction, Point, GRID_SIZE, SPAWN_POINT};

/// Grid cell markers used in [`GameSnapshot::grid`].
pub const CELL_EMPTY: u8 = 0;
pub const CELL_BODY: u8 = 1;
pub const CELL_HEAD: u8 = 2;
pub const CELL_FOOD: u8 = 3;

/// Value-type export of the game state, consumed by renderers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Row-major cell grid (`grid[y][x]`), see the `CELL_*` markers.
    pub grid: [[u8; GRID_SIZE as usize]; GRID_SIZE as usize],
    pub head: Point,
    /// `None` only in the degenerate board-full terminal state.
    pub food: Option<Point>,
    pub direction: Direction,
    pub snake_len: u32,
    pub score: u32,
    pub paused: bool,
    pub game_over: bool,
    pub episode_id: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[CELL_EMPTY; GRID_SIZE as usize]; GRID_SIZE as usize];
        self.head = SPAWN_POINT;
        self.food = None;
        self.direction = Direction::Right;
        self.snake_len = 0;
        self.score = 0;
        self.paused = false;
        self.game_over = false;
        self.episode_id = 0;
        self.seed = 0;
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            grid: [[CELL_EMPTY; GRID_SIZE as usize]; GRID_SIZE as usize],
            head: SPAWN_POINT,
            food: None,
            direction: Direction::Right,
            snake_len: 0,
            score: 0,
            paused: false,
            game_over: false,
            episode_id: 0,
            seed: 0,
        };
        s.clear();
        s
    }
}
