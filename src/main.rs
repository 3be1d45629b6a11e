use anyhow::Context;
use clap::Parser;
use std::io;
use std::path::Path;

mod cli;
mod core;
mod generators;
mod logging;
mod models;

use crate::cli::{Args, InputCollector};
use crate::core::config::Config;
use crate::generators::PasswordGenerator;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load().context("Invalid configuration")?;
    config.apply_args(&args);

    logging::init(config.log_level);
    log::debug!("Loaded config: {:?}", config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut collector = InputCollector::new(stdin.lock(), stdout.lock());

    let request = collector.collect().context("Failed to read password options")?;

    let mut generator = match config.seed {
        Some(seed) => {
            log::warn!("Using fixed seed {}; output is reproducible", seed);
            PasswordGenerator::seeded(seed)
        }
        None => PasswordGenerator::from_entropy().context("Failed to initialise random source")?,
    };

    let password = generator
        .generate(&request)
        .context("Failed to generate password")?;
    let strength = generators::assess(&request);
    log::info!("Generated password of length {} rated {}", request.length, strength);

    let mut out = collector.into_output();
    cli::print_result(&mut out, &password, strength).context("Failed to write result")?;

    Ok(())
}
