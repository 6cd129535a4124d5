use crate::graphics::{blend::rgb, Argb, P2};

pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 480;
pub const GRID_SIZE: i32 = 20;
pub const GRID_WIDTH: i32 = SCREEN_WIDTH / GRID_SIZE;
pub const GRID_HEIGHT: i32 = SCREEN_HEIGHT / GRID_SIZE;
pub const GRID_CELLS: usize = (GRID_WIDTH * GRID_HEIGHT) as usize;

pub const BOARD: P2 = P2(SCREEN_WIDTH, SCREEN_HEIGHT);
pub const CENTER: Cell = P2(SCREEN_WIDTH / 2, SCREEN_HEIGHT / 2);

pub const BOARD_BACKGROUND_COLOR: Argb = rgb(0, 0, 0);
pub const BORDER_COLOR: Argb = rgb(93, 216, 228);
pub const APPLE_COLOR: Argb = rgb(255, 0, 0);
pub const SNAKE_COLOR: Argb = rgb(0, 255, 0);

/// Ticks per second.
pub const DEFAULT_SPEED: u32 = 20;

/// Top-left pixel of a grid square. Always a multiple of `GRID_SIZE`.
pub type Cell = P2;

/// Cell at column `x`, row `y`.
pub fn cell(x: i32, y: i32) -> Cell {
    P2(x, y).scale(GRID_SIZE)
}

pub fn is_aligned(c: Cell) -> bool {
    c.0 % GRID_SIZE == 0
        && c.1 % GRID_SIZE == 0
        && (0..SCREEN_WIDTH).contains(&c.0)
        && (0..SCREEN_HEIGHT).contains(&c.1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    #[cfg(test)]
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector, with y growing downward.
    pub fn vector(self) -> P2 {
        match self {
            Direction::Up => P2(0, -1),
            Direction::Down => P2(0, 1),
            Direction::Left => P2(-1, 0),
            Direction::Right => P2(1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Anything but the four unit vectors is rejected.
    #[cfg(test)]
    pub fn from_vector(v: (i32, i32)) -> Option<Direction> {
        Self::ALL.into_iter().find(|d| d.vector() == P2(v.0, v.1))
    }
}
