pub mod apple;
pub mod grid;
pub mod snake;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::graphics::Canvas;

use apple::Apple;
use grid::{Direction, BOARD_BACKGROUND_COLOR};
use snake::{Snake, TurnPolicy};

/// Anything that paints itself onto the canvas.
pub trait Drawable {
    fn draw(&self, canvas: &mut Canvas);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    /// A direction key was let go.
    ReleaseTurn,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate,
    /// Ran into itself. Carries the length reached before the reset.
    Collided(usize),
}

pub struct Game<R: Rng = StdRng> {
    snake: Snake,
    apple: Apple,
    rng: R,
    best: usize,
}

impl Game<StdRng> {
    /// A fresh game. `seed` makes apple placement reproducible.
    pub fn new(policy: TurnPolicy, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };

        Self::with_rng(Snake::new(policy), rng)
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(snake: Snake, mut rng: R) -> Self {
        let apple = Apple::new(snake.positions(), &mut rng);
        Self::with_parts(snake, apple, rng)
    }

    pub fn with_parts(snake: Snake, apple: Apple, rng: R) -> Self {
        let best = snake.length();

        Self {
            snake,
            apple,
            rng,
            best,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    pub fn score(&self) -> usize {
        self.snake.length() - 1
    }

    pub fn best_score(&self) -> usize {
        self.best - 1
    }

    /// Returns false when the command asks to quit.
    pub fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Turn(d) => self.snake.set_direction(d),
            Command::ReleaseTurn => self.snake.clear_pending(),
            Command::Close => return false,
        }

        true
    }

    pub fn step(&mut self) -> TickOutcome {
        self.snake.move_once();

        if self.snake.head_position() == self.apple.position() {
            self.snake.grow();
            self.best = self.best.max(self.snake.length());
            self.apple.randomize_position(self.snake.positions(), &mut self.rng);

            return TickOutcome::Ate;
        }

        if self.snake.check_self_collision() {
            let reached = self.snake.length();
            self.snake.reset();
            self.apple.randomize_position(self.snake.positions(), &mut self.rng);

            return TickOutcome::Collided(reached);
        }

        TickOutcome::Moved
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        canvas.set_background(BOARD_BACKGROUND_COLOR);
        canvas.clear();

        self.snake.draw(canvas);
        self.apple.draw(canvas);
    }
}
