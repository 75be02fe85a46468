//! The game engine: board, turn, status and the session's win tally.

use super::outcome::{MoveError, MoveOutcome};
use super::position::Position;
use super::rules;
use super::types::{Board, Cell, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Cumulative wins per player for one session.
///
/// Survives [`GameEngine::start_game`]; only a winning move changes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinTally {
    x: u32,
    o: u32,
}

impl WinTally {
    /// Returns the number of games `player` has won.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    fn record_win(&mut self, player: Player) -> u32 {
        let slot = match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        };
        *slot += 1;
        *slot
    }
}

/// Tic-tac-toe engine for two players sharing one device.
///
/// One engine lives for the whole session. [`start_game`](Self::start_game)
/// replaces the round state wholesale; [`submit_move`](Self::submit_move) is
/// the only operation that mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameEngine {
    board: Board,
    turn: Player,
    move_count: u8,
    status: GameStatus,
    tally: WinTally,
}

impl GameEngine {
    /// Opens a session with a fresh game where X moves first.
    #[instrument]
    pub fn new() -> Self {
        Self::starting_with(Player::X)
    }

    /// Opens a session with a fresh game where `player` moves first.
    #[instrument]
    pub fn starting_with(player: Player) -> Self {
        Self {
            board: Board::new(),
            turn: player,
            move_count: 0,
            status: GameStatus::InProgress,
            tally: WinTally::default(),
        }
    }

    /// Resets the board and starts a new game with `player` to move.
    ///
    /// Valid in any state, including mid-game. The win tally is kept.
    #[instrument(skip(self), fields(previous = %self.status))]
    pub fn start_game(&mut self, player: Player) {
        self.board = Board::new();
        self.turn = player;
        self.move_count = 0;
        self.status = GameStatus::InProgress;
        info!(%player, "New game started");
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// # Errors
    ///
    /// Checked in order, and leaves all state untouched when returned:
    /// - [`MoveError::OutOfRange`] if `index` is not a board cell
    /// - [`MoveError::GameInactive`] if the game is already won or tied
    /// - [`MoveError::CellOccupied`] if the cell holds a mark
    #[instrument(skip(self), fields(turn = %self.turn, moves = self.move_count))]
    pub fn submit_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        let pos = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Move outside the board");
            MoveError::OutOfRange(index)
        })?;

        if !self.is_active() {
            debug!(status = %self.status, "Move ignored, game has ended");
            return Err(MoveError::GameInactive);
        }

        if !self.board.is_empty(pos) {
            debug!(position = %pos, "Cell already taken");
            return Err(MoveError::CellOccupied(pos));
        }

        self.board.set(pos, Cell::Occupied(self.turn));
        self.move_count += 1;
        debug_assert_eq!(usize::from(self.move_count), self.board.occupied());

        if self.evaluate_win() {
            self.status = GameStatus::Won(self.turn);
            let wins = self.tally.record_win(self.turn);
            info!(winner = %self.turn, wins, "Game won");
            return Ok(MoveOutcome::Won(self.turn));
        }

        if usize::from(self.move_count) == Position::ALL.len() {
            self.status = GameStatus::Tied;
            info!("Game tied");
            return Ok(MoveOutcome::Tied);
        }

        self.turn = self.turn.opponent();
        debug!(position = %pos, next = %self.turn, "Move accepted");
        Ok(MoveOutcome::Continued(self.turn))
    }

    /// Whether the player to move holds a complete line.
    fn evaluate_win(&self) -> bool {
        rules::has_won(&self.board, self.turn)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move, or the last mover once the game ended.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the number of accepted moves in the current game.
    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true while moves are accepted.
    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Returns the session's win tally.
    pub fn tally(&self) -> &WinTally {
        &self.tally
    }

    /// Returns the number of games `player` has won this session.
    pub fn wins(&self, player: Player) -> u32 {
        self.tally.wins(player)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(engine: &mut GameEngine, moves: &[usize]) -> Result<MoveOutcome, MoveError> {
        let mut last = Err(MoveError::GameInactive);
        for index in moves {
            last = engine.submit_move(*index);
        }
        last
    }

    #[test]
    fn test_new_engine_is_in_progress_with_x() {
        let engine = GameEngine::new();
        assert_eq!(engine.turn(), Player::X);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.move_count(), 0);
        assert_eq!(engine.tally(), &WinTally::default());
    }

    #[test]
    fn test_win_increments_only_winner() {
        let mut engine = GameEngine::new();
        let outcome = play(&mut engine, &[0, 3, 1, 4, 2]);
        assert_eq!(outcome, Ok(MoveOutcome::Won(Player::X)));
        assert_eq!(engine.wins(Player::X), 1);
        assert_eq!(engine.wins(Player::O), 0);
        assert_eq!(engine.turn(), Player::X);
    }

    #[test]
    fn test_win_on_ninth_move_is_not_a_tie() {
        let mut engine = GameEngine::new();
        // X O X / O X O / O X X: X completes the main diagonal last.
        let outcome = play(&mut engine, &[0, 1, 2, 3, 4, 5, 7, 6, 8]);
        assert_eq!(outcome, Ok(MoveOutcome::Won(Player::X)));
        assert_eq!(engine.move_count(), 9);
    }

    #[test]
    fn test_out_of_range_checked_before_status() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(engine.submit_move(9), Err(MoveError::OutOfRange(9)));
        assert_eq!(engine.submit_move(5), Err(MoveError::GameInactive));
    }

    #[test]
    fn test_engine_serializes_state() {
        let mut engine = GameEngine::starting_with(Player::O);
        engine.submit_move(4).unwrap();
        let json = serde_json::to_value(&engine).unwrap();
        assert_eq!(json["turn"], "X");
        assert_eq!(json["move_count"], 1);
        assert_eq!(json["status"], "InProgress");
        assert_eq!(json["tally"]["o"], 0);
    }
}
