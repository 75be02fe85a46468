//! The view seam: what the game asks a front end to show.
//!
//! Front ends implement [`Presenter`]. The engine never renders anything
//! itself; [`GameController`](crate::GameController) translates engine
//! outcomes into presenter calls and runs the [`Command`]s behind dialog
//! buttons.

use super::position::Position;
use super::types::{Cell, Player};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Render hooks a front end provides.
pub trait Presenter {
    /// Shows whose turn it is.
    fn render_turn(&mut self, turn: Player);

    /// Shows the mark in one cell. [`Cell::Empty`] clears it.
    fn render_cell(&mut self, position: Position, cell: Cell);

    /// Shows a player's win counter.
    fn render_wins(&mut self, player: Player, wins: u32);

    /// Opens a modal dialog, replacing any dialog already open.
    fn open_dialog(&mut self, dialog: Dialog);

    /// Closes the open dialog, if any.
    fn close_dialog(&mut self);
}

/// Semantic colour of a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tone {
    /// Something the player did was refused.
    Error,
    /// Neutral prompt.
    Information,
    /// A player won.
    Success,
}

/// An action behind a dialog button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Command {
    /// Start a new game with the given player to move.
    #[display("start game with {}", _0)]
    StartGame(Player),
    /// Close the open dialog.
    #[display("close dialog")]
    CloseDialog,
}

/// A labelled button that runs its commands in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct DialogButton {
    /// Text on the button.
    label: String,
    /// Commands run when the button is activated.
    commands: Vec<Command>,
}

impl DialogButton {
    /// Button that starts a game with `player` and closes the dialog.
    pub fn start_with(player: Player) -> Self {
        Self::new(
            player.to_string(),
            vec![Command::StartGame(player), Command::CloseDialog],
        )
    }

    /// Button that only closes the dialog.
    pub fn dismiss(label: impl Into<String>) -> Self {
        Self::new(label.into(), vec![Command::CloseDialog])
    }

    /// Returns true if `key` names this button, ignoring case.
    pub fn matches(&self, key: &str) -> bool {
        self.label.eq_ignore_ascii_case(key.trim())
    }
}

/// Modal dialog content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Dialog {
    /// Title line.
    header: String,
    /// Message under the title.
    body: String,
    /// Colour category.
    tone: Tone,
    /// Buttons, left to right.
    buttons: Vec<DialogButton>,
}

impl Dialog {
    /// Creates a dialog.
    pub fn new(
        header: impl Into<String>,
        body: impl Into<String>,
        tone: Tone,
        buttons: Vec<DialogButton>,
    ) -> Self {
        Self {
            header: header.into(),
            body: body.into(),
            tone,
            buttons,
        }
    }

    /// Asks who should start the first game, or a restarted one.
    #[instrument]
    pub fn new_game() -> Self {
        Self::new(
            "Starting a new game!",
            "Who should start?",
            Tone::Information,
            starter_buttons(),
        )
    }

    /// Tells the player the selected cell is taken.
    #[instrument]
    pub fn cell_taken() -> Self {
        Self::new(
            "Oops!",
            "Clicked cell is already taken",
            Tone::Error,
            vec![DialogButton::dismiss("OK")],
        )
    }

    /// Announces a winner and asks who starts next.
    #[instrument]
    pub fn won(player: Player) -> Self {
        Self::new(
            format!("Player {player} has won this game!"),
            "Who should start now?",
            Tone::Success,
            starter_buttons(),
        )
    }

    /// Announces a tie and asks who starts next.
    #[instrument]
    pub fn tied() -> Self {
        Self::new(
            "Game ended with a tie!",
            "Who should start?",
            Tone::Information,
            starter_buttons(),
        )
    }

    /// Finds the button whose label matches `key`.
    pub fn button_for(&self, key: &str) -> Option<&DialogButton> {
        self.buttons.iter().find(|b| b.matches(key))
    }
}

fn starter_buttons() -> Vec<DialogButton> {
    Player::iter().map(DialogButton::start_with).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_buttons_start_then_close() {
        let dialog = Dialog::new_game();
        let labels: Vec<_> = dialog.buttons().iter().map(|b| b.label().as_str()).collect();
        assert_eq!(labels, ["X", "O"]);
        assert_eq!(
            dialog.buttons()[1].commands(),
            &vec![Command::StartGame(Player::O), Command::CloseDialog]
        );
    }

    #[test]
    fn test_button_lookup_ignores_case() {
        let dialog = Dialog::won(Player::O);
        assert_eq!(dialog.header(), "Player O has won this game!");
        assert_eq!(dialog.button_for("x").map(|b| b.label().as_str()), Some("X"));
        assert!(dialog.button_for("ok").is_none());
        assert!(Dialog::cell_taken().button_for("ok").is_some());
    }

    #[test]
    fn test_tone_serializes_lowercase() {
        assert_eq!(Tone::Information.to_string(), "information");
        assert_eq!(
            serde_json::to_string(&Tone::Success).unwrap(),
            "\"success\""
        );
    }
}
