use anyhow::{bail, Context};
use log::LevelFilter;

use super::*;

pub const USAGE: &str = "\
Usage: snake [options]

Arrow keys steer, Escape or closing the window quits.

Options:
    --fps <n>       ticks per second (1..=120, default 20)
    --scale <n>     window scale factor (1..=4, default 1)
    --immediate     apply turns as soon as a key is pressed
    --seed <n>      fixed seed for apple placement
    --quiet         only log warnings and errors
    --verbose       log every apple eaten
    --help          print this message
";

fn value<'a, I>(args: &mut I, flag: &str) -> anyhow::Result<&'a str>
where
    I: Iterator<Item = &'a String> + ?Sized,
{
    match args.next() {
        Some(v) => Ok(v.as_str()),
        None => bail!("Argument error: Expected value for {flag}."),
    }
}

impl Settings {
    /// The first item is the program name and is skipped.
    pub fn eval_args<'a>(mut self, args: &mut dyn Iterator<Item = &'a String>) -> anyhow::Result<Self> {
        args.next();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--fps" => {
                    let fps = value(args, arg)?
                        .parse::<u32>()
                        .context("Argument error: fps must be a positive integer")?;

                    if fps == 0 || fps > MAX_FPS {
                        bail!("Argument error: fps must be between 1 and {MAX_FPS}.");
                    }

                    self.fps = fps;
                }

                "--scale" => {
                    let scale = value(args, arg)?
                        .parse::<u8>()
                        .context("Argument error: scale must be a positive integer")?;

                    if scale == 0 {
                        bail!("Argument error: scale needs to be larger than 0.");
                    }

                    if scale > MAX_SCALE_FACTOR {
                        bail!("Argument error: scale exceeds maximum allowed {MAX_SCALE_FACTOR}.");
                    }

                    self.scale = scale;
                }

                "--immediate" => self.policy = TurnPolicy::Immediate,

                "--seed" => {
                    let seed = value(args, arg)?
                        .parse::<u64>()
                        .context("Argument error: seed must be an unsigned integer")?;

                    self.seed = Some(seed);
                }

                "--quiet" => self.log_level = LevelFilter::Warn,

                "--verbose" => self.log_level = LevelFilter::Debug,

                "--help" | "-h" => self.help = true,

                other => bail!("Argument error: Unknown option {other}"),
            }
        }

        Ok(self)
    }

    pub fn print_startup_info(&self) {
        let mut string_out = String::new();

        string_out += "Snake\n";
        string_out += &format!("Tick rate: {}hz\n", self.fps);
        string_out += &format!("Turns: {}\n", self.policy.name());

        let (w, h) = self.window_size();
        string_out += &format!("Window: {w}x{h} (scale {})\n", self.scale);

        if let Some(seed) = self.seed {
            string_out += &format!("Seed: {seed}\n");
        }

        log::info!("{}", string_out.trim_end());
    }
}
