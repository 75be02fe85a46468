//! Hotseat tic-tac-toe - two players, one device.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns the board, the turn, the game status
//!   and the session's [`WinTally`]
//! - **Presenter**: the [`Presenter`] trait a front end implements, plus the
//!   [`Dialog`]s it is asked to show
//! - **Controller**: [`GameController`] routes cell selections and dialog
//!   [`Command`]s between the two
//!
//! # Example
//!
//! ```
//! use hotseat_tictactoe::{GameEngine, MoveOutcome, Player};
//!
//! let mut engine = GameEngine::new();
//! engine.start_game(Player::O);
//! assert_eq!(engine.submit_move(4), Ok(MoveOutcome::Continued(Player::X)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod engine;
mod outcome;
mod position;
mod presenter;
mod rules;
mod types;

pub use controller::GameController;
pub use engine::{GameEngine, WinTally};
pub use outcome::{MoveError, MoveOutcome};
pub use position::Position;
pub use presenter::{Command, Dialog, DialogButton, Presenter, Tone};
pub use rules::{WIN_COMBINATIONS, has_won, winning_line};
pub use types::{Board, Cell, GameStatus, Player};
