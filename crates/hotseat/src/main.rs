//! Hotseat - command-line entry point.

use anyhow::Result;
use clap::Parser;
use hotseat::{Cli, Command, HotseatConfig, OutputFormat, logging, run_script, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = HotseatConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            logging::init_file(config.log_file(), config.log_filter())?;
            tui::run_tui(&config)
        }
        Command::Script { steps, json } => {
            logging::init_stderr(config.log_filter());
            let format = if json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            };
            let engine = run_script(&steps, format, std::io::stdout().lock())?;
            info!(status = %engine.status(), "Script finished");
            Ok(())
        }
    }
}
