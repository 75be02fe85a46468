//! Terminal view state, updated through the presenter hooks.

use hotseat_tictactoe::{Cell, Command, Dialog, Player, Position, Presenter};
use tracing::{debug, instrument};

/// What the terminal currently shows.
#[derive(Debug, Clone)]
pub struct TuiPresenter {
    cells: [Cell; 9],
    turn: Player,
    x_wins: u32,
    o_wins: u32,
    dialog: Option<Dialog>,
    focused: usize,
    cursor: Position,
    show_cell_numbers: bool,
}

impl TuiPresenter {
    /// Creates an empty view.
    pub fn new(show_cell_numbers: bool) -> Self {
        Self {
            cells: [Cell::Empty; 9],
            turn: Player::X,
            x_wins: 0,
            o_wins: 0,
            dialog: None,
            focused: 0,
            cursor: Position::Center,
            show_cell_numbers,
        }
    }

    /// Returns the mark shown at `pos`.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Returns the turn indicator.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the win counter shown for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Returns the open dialog.
    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    /// Index of the focused dialog button.
    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Returns the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether empty cells show their number.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// Moves the board cursor, clamped to the board.
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        self.cursor = self.cursor.step(d_row, d_col);
    }

    /// Moves dialog focus by `delta` buttons, wrapping around.
    pub fn shift_focus(&mut self, delta: isize) {
        if let Some(dialog) = &self.dialog {
            let count = dialog.buttons().len();
            if count > 0 {
                self.focused = (self.focused as isize + delta).rem_euclid(count as isize) as usize;
            }
        }
    }

    /// Commands behind the focused button.
    #[instrument(skip(self))]
    pub fn focused_commands(&self) -> Option<Vec<Command>> {
        self.dialog
            .as_ref()
            .and_then(|d| d.buttons().get(self.focused))
            .map(|b| b.commands().clone())
    }

    /// Commands behind the button labelled `key`.
    #[instrument(skip(self))]
    pub fn commands_for(&self, key: &str) -> Option<Vec<Command>> {
        self.dialog
            .as_ref()
            .and_then(|d| d.button_for(key))
            .map(|b| b.commands().clone())
    }
}

impl Presenter for TuiPresenter {
    fn render_turn(&mut self, turn: Player) {
        self.turn = turn;
    }

    fn render_cell(&mut self, position: Position, cell: Cell) {
        self.cells[position.to_index()] = cell;
    }

    fn render_wins(&mut self, player: Player, wins: u32) {
        match player {
            Player::X => self.x_wins = wins,
            Player::O => self.o_wins = wins,
        }
    }

    fn open_dialog(&mut self, dialog: Dialog) {
        debug!(header = %dialog.header(), "Dialog opened");
        self.dialog = Some(dialog);
        self.focused = 0;
    }

    fn close_dialog(&mut self) {
        debug!("Dialog closed");
        self.dialog = None;
        self.focused = 0;
    }
}
