//! Tests for the game engine state machine.

use hotseat_tictactoe::{Cell, GameEngine, GameStatus, MoveError, MoveOutcome, Player, Position};

fn play(engine: &mut GameEngine, moves: &[usize]) -> Vec<Result<MoveOutcome, MoveError>> {
    moves.iter().map(|i| engine.submit_move(*i)).collect()
}

fn occupied(engine: &GameEngine) -> usize {
    engine
        .board()
        .cells()
        .iter()
        .filter(|c| **c != Cell::Empty)
        .count()
}

#[test]
fn test_move_count_tracks_accepted_moves() {
    let mut engine = GameEngine::new();
    for (n, index) in [4, 0, 8, 2, 6].into_iter().enumerate() {
        assert!(engine.submit_move(index).is_ok());
        assert_eq!(usize::from(engine.move_count()), n + 1);
        assert_eq!(occupied(&engine), n + 1);
    }
}

/// Plays every continuation of `engine` and returns how many games finish.
fn walk_games(engine: &GameEngine) -> u32 {
    let depth = usize::from(engine.move_count());
    let mut finished = 0;
    for index in 0..9 {
        let mut next = engine.clone();
        let Ok(outcome) = next.submit_move(index) else {
            continue;
        };
        assert_eq!(usize::from(next.move_count()), depth + 1);
        assert_eq!(occupied(&next), depth + 1);
        assert_eq!(outcome.is_terminal(), next.status().is_terminal());
        if outcome.is_terminal() {
            finished += 1;
        } else {
            finished += walk_games(&next);
        }
    }
    finished
}

#[test]
fn test_every_move_sequence_counts_moves() {
    // Known number of distinct tic-tac-toe games when play stops at a win.
    assert_eq!(walk_games(&GameEngine::new()), 255_168);
}

#[test]
fn test_turn_alternates() {
    let mut engine = GameEngine::new();
    assert_eq!(engine.submit_move(4), Ok(MoveOutcome::Continued(Player::O)));
    assert_eq!(engine.submit_move(0), Ok(MoveOutcome::Continued(Player::X)));
    assert_eq!(engine.turn(), Player::X);
}

#[test]
fn test_occupied_cell_changes_nothing() {
    let mut engine = GameEngine::new();
    engine.submit_move(4).unwrap();
    let before = engine.clone();

    assert_eq!(
        engine.submit_move(4),
        Err(MoveError::CellOccupied(Position::Center))
    );
    assert_eq!(engine, before);
    assert_eq!(engine.turn(), Player::O);
}

#[test]
fn test_terminal_game_rejects_moves() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 3, 1, 4, 2]);
    let before = engine.clone();

    for index in [5, 6, 7, 8, 0] {
        assert_eq!(engine.submit_move(index), Err(MoveError::GameInactive));
    }
    assert_eq!(engine, before);
}

#[test]
fn test_start_game_resets_round() {
    let mut engine = GameEngine::new();
    engine.start_game(Player::X);
    assert_eq!(engine.turn(), Player::X);
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert!(engine.board().cells().iter().all(|c| *c == Cell::Empty));
}

#[test]
fn test_start_game_mid_game() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 1, 2]);

    engine.start_game(Player::O);
    assert_eq!(engine.move_count(), 0);
    assert_eq!(occupied(&engine), 0);
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.turn(), Player::O);
}

#[test]
fn test_top_row_win() {
    let mut engine = GameEngine::new();
    engine.start_game(Player::X);
    let results = play(&mut engine, &[0, 3, 1, 4, 2]);

    assert!(results[..4].iter().all(|r| matches!(r, Ok(MoveOutcome::Continued(_)))));
    assert_eq!(results[4], Ok(MoveOutcome::Won(Player::X)));
    assert_eq!(engine.status(), GameStatus::Won(Player::X));
    assert_eq!(engine.wins(Player::X), 1);
    assert_eq!(engine.wins(Player::O), 0);
}

#[test]
fn test_full_board_without_line_is_tie() {
    let mut engine = GameEngine::new();
    engine.start_game(Player::X);
    // X O X / X O O / O X X
    let results = play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(results[8], Ok(MoveOutcome::Tied));
    assert_eq!(engine.status(), GameStatus::Tied);
    assert_eq!(engine.move_count(), 9);
    assert_eq!(engine.wins(Player::X), 0);
    assert_eq!(engine.wins(Player::O), 0);
}

#[test]
fn test_tally_survives_new_games() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 3, 1, 4, 2]);

    engine.start_game(Player::O);
    assert_eq!(engine.wins(Player::X), 1);

    // O takes the left column.
    play(&mut engine, &[0, 1, 3, 2, 6]);
    assert_eq!(engine.status(), GameStatus::Won(Player::O));

    engine.start_game(Player::X);
    assert_eq!(engine.wins(Player::X), 1);
    assert_eq!(engine.wins(Player::O), 1);
}

#[test]
fn test_out_of_range_index() {
    let mut engine = GameEngine::new();
    assert_eq!(engine.submit_move(9), Err(MoveError::OutOfRange(9)));
    assert_eq!(engine.submit_move(usize::MAX), Err(MoveError::OutOfRange(usize::MAX)));
    assert_eq!(engine.move_count(), 0);
}
