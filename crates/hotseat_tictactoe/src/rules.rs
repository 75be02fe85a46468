//! Win detection for tic-tac-toe.

use super::position::Position;
use super::types::{Board, Cell, Player};
use tracing::instrument;

/// The 8 lines that win when one player holds all three cells.
pub const WIN_COMBINATIONS: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line fully held by `player`, scanning in fixed order.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, player: Player) -> Option<[Position; 3]> {
    let mark = Cell::Occupied(player);
    WIN_COMBINATIONS
        .into_iter()
        .find(|line| line.iter().all(|pos| board.get(*pos) == mark))
}

/// Checks whether `player` holds any complete line.
pub fn has_won(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(player: Player, positions: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in positions {
            board.set(*pos, Cell::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(
            Player::X,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        assert!(has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(
            Player::O,
            &[Position::TopRight, Position::Center, Position::BottomLeft],
        );
        assert_eq!(
            winning_line(&board, Player::O),
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
    }

    #[test]
    fn test_first_match_wins_when_two_lines_complete() {
        let board = board_with(
            Player::X,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
        );
        assert_eq!(winning_line(&board, Player::X), Some(WIN_COMBINATIONS[0]));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Player::X, &[Position::TopLeft, Position::TopCenter]);
        assert!(!has_won(&board, Player::X));
    }
}
