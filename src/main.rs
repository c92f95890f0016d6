//! Periph CLI - Peripheral controller bring-up and status checks

use clap::Parser;

use periph_cli::cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
