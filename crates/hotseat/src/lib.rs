//! Hotseat - two-player tic-tac-toe in the terminal.
//!
//! # Architecture
//!
//! - **Engine**: [`hotseat_tictactoe`] holds the rules and the win tally
//! - **TUI**: a ratatui presenter with a modal dialog ([`tui`])
//! - **Script**: a headless presenter that replays steps ([`script`])
//! - **Config**: optional TOML settings ([`HotseatConfig`])

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod script;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, HotseatConfig};
pub use script::{
    OutputFormat, ScriptEvent, ScriptPresenter, ScriptStep, ScriptStepError, run_script,
};
