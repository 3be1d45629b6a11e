// src/cli/mod.rs
use clap::Parser;
use log::LevelFilter;
use std::io::{self, Write};

use crate::models::Strength;

pub mod prompt;

pub use prompt::InputCollector;

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive random password generator", long_about = None)]
pub struct Args {
    /// Seed the generator for a reproducible password
    #[arg(long)]
    pub seed: Option<u64>,

    /// Diagnostic log level written to stderr (off, error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<LevelFilter>,
}

/// Writes the generated password and its strength label.
pub fn print_result<W: Write>(out: &mut W, password: &str, strength: Strength) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Generated Password:")?;
    writeln!(out, "{}", password)?;
    writeln!(out)?;
    writeln!(out, "Password Strength: {}", strength)?;
    out.flush()
}
