//! Key bindings.

use crossterm::event::KeyCode;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the game.
    Quit,
    /// Ask who should start a fresh game.
    Restart,
    /// Move the board cursor by rows and columns.
    MoveCursor(isize, isize),
    /// Select a cell by zero-based index.
    Select(usize),
    /// Select the cell under the cursor.
    SelectCursor,
    /// Move dialog focus by this many buttons.
    Focus(isize),
    /// Activate the focused dialog button.
    Activate,
    /// Activate the dialog button labelled with this character.
    Press(char),
    /// Nothing bound.
    None,
}

/// Maps a key to an action. An open dialog captures all input except quit.
pub fn action_for(key: KeyCode, dialog_open: bool) -> Action {
    match key {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
        _ if dialog_open => dialog_action(key),
        _ => board_action(key),
    }
}

fn dialog_action(key: KeyCode) -> Action {
    match key {
        KeyCode::Left | KeyCode::BackTab => Action::Focus(-1),
        KeyCode::Right | KeyCode::Tab => Action::Focus(1),
        KeyCode::Enter | KeyCode::Char(' ') => Action::Activate,
        KeyCode::Char(c) => Action::Press(c),
        _ => Action::None,
    }
}

fn board_action(key: KeyCode) -> Action {
    match key {
        KeyCode::Up => Action::MoveCursor(-1, 0),
        KeyCode::Down => Action::MoveCursor(1, 0),
        KeyCode::Left => Action::MoveCursor(0, -1),
        KeyCode::Right => Action::MoveCursor(0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => Action::SelectCursor,
        KeyCode::Char('r') | KeyCode::Char('R') => Action::Restart,
        KeyCode::Char(c) => match c.to_digit(10) {
            Some(digit @ 1..=9) => Action::Select(digit as usize - 1),
            _ => Action::None,
        },
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_select_cells() {
        assert_eq!(action_for(KeyCode::Char('1'), false), Action::Select(0));
        assert_eq!(action_for(KeyCode::Char('9'), false), Action::Select(8));
        assert_eq!(action_for(KeyCode::Char('0'), false), Action::None);
    }

    #[test]
    fn test_dialog_captures_board_keys() {
        assert_eq!(action_for(KeyCode::Char('5'), true), Action::Press('5'));
        assert_eq!(action_for(KeyCode::Left, true), Action::Focus(-1));
        assert_eq!(action_for(KeyCode::Enter, true), Action::Activate);
        assert_eq!(action_for(KeyCode::Char('o'), true), Action::Press('o'));
        assert_eq!(action_for(KeyCode::Esc, true), Action::Quit);
    }

    #[test]
    fn test_q_quits_with_dialog_open() {
        assert_eq!(action_for(KeyCode::Char('q'), true), Action::Quit);
        assert_eq!(action_for(KeyCode::Char('Q'), true), Action::Quit);
    }

    #[test]
    fn test_board_navigation() {
        assert_eq!(action_for(KeyCode::Up, false), Action::MoveCursor(-1, 0));
        assert_eq!(action_for(KeyCode::Char(' '), false), Action::SelectCursor);
        assert_eq!(action_for(KeyCode::Char('r'), false), Action::Restart);
        assert_eq!(action_for(KeyCode::Char('q'), false), Action::Quit);
    }
}
