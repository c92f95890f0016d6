//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use crate::output::OutputContext;

/// Peripheral controller bring-up and status checks
#[derive(Parser)]
#[command(name = "periph", version, propagate_version = true)]
pub struct Cli {
    /// Configuration source to validate
    #[arg(long, global = true, default_value = "fake.cfg")]
    pub config: String,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Bring up peripherals, check their status, then verify the logger
    Up,

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command. Running with no subcommand is `up`.
    ///
    /// # Errors
    ///
    /// Returns an error if peripherals initialization fails validation.
    pub fn run(self) -> Result<()> {
        let Cli { config, json, quiet, no_color, command } = self;
        match command.unwrap_or(Command::Up) {
            Command::Up => {
                // JSON mode owns stdout: the human narration is suppressed and
                // only the final report object is printed.
                let ctx = OutputContext::new(no_color, quiet || json);
                commands::up::run(&ctx, &config, json)
            }
            Command::Version => {
                commands::version::run(json);
                Ok(())
            }
        }
    }
}
