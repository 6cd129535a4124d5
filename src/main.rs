mod data;
mod game;
mod graphics;
mod modes;

use data::{config::USAGE, Settings};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let settings = Settings::default().eval_args(&mut args.iter())?;

    if settings.help {
        print!("{USAGE}");
        return Ok(());
    }

    data::logging::init(settings.log_level)?;

    modes::windowed_mode::winit_main(settings)
}
