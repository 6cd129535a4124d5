use std::collections::HashSet;

use rand::Rng;

use super::grid::*;
use super::Drawable;
use crate::graphics::{Argb, Canvas};

pub struct Apple {
    position: Cell,
    color: Argb,
}

impl Apple {
    pub fn new<'a, R: Rng + ?Sized>(
        occupied: impl IntoIterator<Item = &'a Cell>,
        rng: &mut R,
    ) -> Self {
        let mut apple = Self::at(CENTER);
        apple.randomize_position(occupied, rng);
        apple
    }

    pub fn at(position: Cell) -> Self {
        Self {
            position,
            color: APPLE_COLOR,
        }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Moves the apple to a random free cell. Returns false and leaves
    /// the apple where it is when `occupied` covers the whole board.
    pub fn randomize_position<'a, R: Rng + ?Sized>(
        &mut self,
        occupied: impl IntoIterator<Item = &'a Cell>,
        rng: &mut R,
    ) -> bool {
        let taken: HashSet<Cell> = occupied
            .into_iter()
            .copied()
            .filter(|&c| is_aligned(c))
            .collect();

        if taken.len() >= GRID_CELLS {
            log::warn!("No free cell left for the apple, it stays at {:?}", self.position);
            return false;
        }

        loop {
            let candidate = cell(rng.gen_range(0..GRID_WIDTH), rng.gen_range(0..GRID_HEIGHT));

            if !taken.contains(&candidate) {
                self.position = candidate;
                return true;
            }
        }
    }
}

impl Drawable for Apple {
    fn draw(&self, canvas: &mut Canvas) {
        let size = GRID_SIZE as usize;

        canvas.color(self.color);
        canvas.draw_rect_wh(self.position, size, size);
        canvas.color(BORDER_COLOR);
        canvas.draw_rect_outline_wh(self.position, size, size);
    }
}
