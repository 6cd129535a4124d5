pub mod config;
pub mod logging;

use log::LevelFilter;

use crate::game::grid::DEFAULT_SPEED;
use crate::game::snake::TurnPolicy;

pub const DEFAULT_SCALE: u8 = 1;
pub const MAX_SCALE_FACTOR: u8 = 4;
pub const MAX_FPS: u32 = 120;

/// Startup configuration. Filled with defaults, then overridden by
/// [`Settings::eval_args`]. Nothing here changes once the game runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Ticks per second. One move and one frame per tick.
    pub fps: u32,

    /// Integer upscaling of the 640x480 board in the window.
    pub scale: u8,

    pub policy: TurnPolicy,

    /// Fixed seed for apple placement.
    pub seed: Option<u64>,

    pub log_level: LevelFilter,

    /// `--help` was passed; print usage and quit.
    pub help: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps: DEFAULT_SPEED,
            scale: DEFAULT_SCALE,
            policy: TurnPolicy::default(),
            seed: None,
            log_level: LevelFilter::Info,
            help: false,
        }
    }
}

impl Settings {
    pub fn window_size(&self) -> (u32, u32) {
        use crate::game::grid::{SCREEN_HEIGHT, SCREEN_WIDTH};

        let s = self.scale as u32;
        (SCREEN_WIDTH as u32 * s, SCREEN_HEIGHT as u32 * s)
    }
}
