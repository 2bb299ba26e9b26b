//! CineMate CLI - Command-line interface
//!
//! Provides command-line access to the CineMate release calendar.

mod commands;

use clap::Parser;
use cinemate_core::tracing_setup::{CliLogLevel, init_tracing};

#[derive(Parser)]
#[command(name = "cinemate")]
#[command(about = "Upcoming movie and series release calendar")]
struct Cli {
    /// Console log verbosity
    #[arg(long, global = true, default_value_t = CliLogLevel::Warn)]
    log_level: CliLogLevel,

    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_tracing(cli.log_level.as_tracing_level(), None)?;

    commands::handle_command(cli.command).await?;

    Ok(())
}
