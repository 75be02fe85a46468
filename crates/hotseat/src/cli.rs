//! Command-line interface for hotseat.

use crate::script::ScriptStep;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hotseat - two-player tic-tac-toe on one keyboard
#[derive(Parser, Debug)]
#[command(name = "hotseat")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (optional; defaults apply if missing)
    #[arg(short, long, global = true, default_value = "hotseat.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Run a scripted session without a terminal UI
    Script {
        /// Steps: `1`-`9` select a cell, `x`/`o` press the matching
        /// dialog button, `ok` presses the first dialog button
        #[arg(required = true)]
        steps: Vec<ScriptStep>,

        /// Print one JSON object per presenter call
        #[arg(long)]
        json: bool,
    },
}
