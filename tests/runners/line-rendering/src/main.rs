//! Rasterizes a single line segment and prints the plotted pixels
//!
//! Set `RUST_LOG=debug` for more details about the rasterization.

mod cli;
mod error;

use std::process::ExitCode;

use clap::Parser;

use crate::settings::{Format, Settings};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::Arguments::parse();
    let (from, to) = args.endpoints();

    let mut settings = Settings::default();
    args.update_settings(&mut settings);

    match render::render(from, to, &settings) {
        Ok(output) => {
            print!("{output}");
            if settings.format == Format::Grid {
                println!();
            }
            ExitCode::SUCCESS
        },
        Err(error) => {
            log::error!("{error}");
            ExitCode::FAILURE
        },
    }
}
