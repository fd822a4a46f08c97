use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};

use skycast_cli::{open_input, run, Args, Settings};
use skycast_config::AppConfig;

fn main() -> Result<()> {
    let args = Args::parse();

    // Config
    let cfg = AppConfig::load().context("Failed to load configuration")?;

    // Logging
    skycast_obs::init("skycast", &cfg);

    let settings = Settings::resolve(&args, &cfg);
    tracing::debug!(?settings, "Resolved settings");

    let input = open_input(args.input.as_ref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&settings, input, &mut out)?;
    out.flush().context("Failed to flush output")?;

    Ok(())
}
