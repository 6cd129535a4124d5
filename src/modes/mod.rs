pub mod windowed_mode;

use rand::Rng;

use crate::game::{Command, Game, TickOutcome};
use crate::graphics::Canvas;

/// Where finished frames go.
pub trait RenderTarget {
    fn present(&mut self, canvas: &Canvas) -> anyhow::Result<()>;
}

/// Blocks until the next tick is due.
pub trait Pacer {
    fn wait(&mut self);
}

impl Pacer for fps_clock::FpsClock {
    fn wait(&mut self) {
        self.tick();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One full tick: input, move, checks, render, present, sleep.
///
/// Presentation failures are logged and the game keeps going.
pub fn run_tick<R: Rng>(
    game: &mut Game<R>,
    commands: &mut Vec<Command>,
    canvas: &mut Canvas,
    target: &mut impl RenderTarget,
    pacer: &mut impl Pacer,
) -> Flow {
    for cmd in commands.drain(..) {
        if !game.handle(cmd) {
            log::info!("Quitting, score {} (best {})", game.score(), game.best_score());
            return Flow::Exit;
        }
    }

    match game.step() {
        TickOutcome::Ate => log::debug!(
            "Apple eaten, length is now {}. Next apple at {:?}",
            game.snake().length(),
            game.apple().position()
        ),

        TickOutcome::Collided(length) => log::info!(
            "Ran into itself at length {}, starting over (best score {})",
            length,
            game.best_score()
        ),

        TickOutcome::Moved => {}
    }

    game.draw(canvas);

    if let Err(e) = target.present(canvas) {
        log::error!("Failed to present the frame: {e:#}");
    }

    pacer.wait();

    Flow::Continue
}
