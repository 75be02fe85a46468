//! Results of submitting a move.

use super::position::Position;
use super::types::Player;
use serde::{Deserialize, Serialize};

/// An accepted move and where it left the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveOutcome {
    /// Game continues; the contained player moves next.
    #[display("{} to move", _0)]
    Continued(Player),
    /// The move completed a line for the contained player.
    #[display("{} won", _0)]
    Won(Player),
    /// The move filled the board without completing a line.
    #[display("tie")]
    Tied,
}

impl MoveOutcome {
    /// Returns true if this move ended the game.
    pub fn is_terminal(self) -> bool {
        !matches!(self, MoveOutcome::Continued(_))
    }
}

/// Reasons a move is rejected. A rejected move never changes game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveError {
    /// The cell index is not on the board.
    #[display("Cell index {} is outside the board (0-8)", _0)]
    OutOfRange(usize),

    /// The game has already been won or tied.
    #[display("Game is not in progress")]
    GameInactive,

    /// The selected cell already holds a mark.
    #[display("{} is already taken", _0)]
    CellOccupied(Position),
}

impl std::error::Error for MoveError {}
