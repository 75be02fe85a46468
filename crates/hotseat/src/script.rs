//! Headless sessions driven by a list of steps.
//!
//! Every presenter call becomes a [`ScriptEvent`] printed as a text line or
//! a JSON object. Selections are forwarded to the engine even while a dialog
//! is open, so scripts can observe every rejection the engine produces.

use anyhow::Result;
use derive_more::{Display, Error};
use hotseat_tictactoe::{
    Cell, Dialog, GameController, GameEngine, GameStatus, Player, Position, Presenter,
};
use serde::Serialize;
use std::io::Write;
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

/// One scripted user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    /// Select a cell by zero-based index.
    Select(usize),
    /// Press the dialog button labelled with this player.
    Press(Player),
    /// Press the first button of the open dialog.
    Dismiss,
}

/// A script step that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid script step '{}': expected a cell number (1-9), x, o or ok", input)]
pub struct ScriptStepError {
    /// The offending input.
    pub input: String,
}

impl FromStr for ScriptStep {
    type Err = ScriptStepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if let Ok(number @ 1..=9) = token.parse::<usize>() {
            return Ok(ScriptStep::Select(number - 1));
        }
        if token.eq_ignore_ascii_case("ok") {
            return Ok(ScriptStep::Dismiss);
        }
        Player::from_str(token)
            .map(ScriptStep::Press)
            .map_err(|_| ScriptStepError {
                input: s.to_string(),
            })
    }
}

/// Something the session reported, in call order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    /// Turn indicator changed.
    Turn {
        /// Player to move.
        player: Player,
    },
    /// A cell was drawn.
    Cell {
        /// Zero-based cell index.
        index: usize,
        /// Named position.
        position: Position,
        /// Mark in the cell.
        mark: Option<Player>,
    },
    /// A win counter was drawn.
    Wins {
        /// Whose counter.
        player: Player,
        /// Games won this session.
        wins: u32,
    },
    /// A dialog opened.
    DialogOpened {
        /// The dialog shown.
        dialog: Dialog,
    },
    /// The dialog closed.
    DialogClosed,
    /// A step had no effect or was refused.
    Rejected {
        /// One-based step number.
        step: usize,
        /// Why.
        reason: String,
    },
    /// Final state after the last step.
    Summary {
        /// Game status.
        status: GameStatus,
        /// Player to move, or the last mover if the game ended.
        turn: Player,
        /// Accepted moves in the current game.
        moves: u8,
        /// Session wins for X.
        x_wins: u32,
        /// Session wins for O.
        o_wins: u32,
    },
}

impl std::fmt::Display for ScriptEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptEvent::Turn { player } => write!(f, "turn: {}", player),
            ScriptEvent::Cell {
                index,
                position,
                mark,
            } => match mark {
                Some(player) => write!(f, "cell {} ({}): {}", index + 1, position, player),
                None => write!(f, "cell {} ({}): empty", index + 1, position),
            },
            ScriptEvent::Wins { player, wins } => write!(f, "wins: {} = {}", player, wins),
            ScriptEvent::DialogOpened { dialog } => write!(
                f,
                "dialog [{}] {} | {} | buttons: {}",
                dialog.tone(),
                dialog.header(),
                dialog.body(),
                button_labels(dialog)
            ),
            ScriptEvent::DialogClosed => write!(f, "dialog closed"),
            ScriptEvent::Rejected { step, reason } => write!(f, "step {}: {}", step, reason),
            ScriptEvent::Summary {
                status,
                turn,
                moves,
                x_wins,
                o_wins,
            } => write!(
                f,
                "status: {}, turn: {}, moves: {}, wins: X={} O={}",
                status, turn, moves, x_wins, o_wins
            ),
        }
    }
}

fn button_labels(dialog: &Dialog) -> String {
    dialog
        .buttons()
        .iter()
        .map(|b| b.label().as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ScriptEvent {
    fn summary(engine: &GameEngine) -> Self {
        ScriptEvent::Summary {
            status: engine.status(),
            turn: engine.turn(),
            moves: engine.move_count(),
            x_wins: engine.wins(Player::X),
            o_wins: engine.wins(Player::O),
        }
    }
}

/// Presenter that records calls and remembers the open dialog.
#[derive(Debug, Default)]
pub struct ScriptPresenter {
    events: Vec<ScriptEvent>,
    dialog: Option<Dialog>,
}

impl ScriptPresenter {
    /// Creates an empty presenter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the open dialog.
    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    /// Takes the events recorded since the last call.
    pub fn drain(&mut self) -> Vec<ScriptEvent> {
        std::mem::take(&mut self.events)
    }

    fn reject(&mut self, step: usize, reason: impl Into<String>) {
        self.events.push(ScriptEvent::Rejected {
            step,
            reason: reason.into(),
        });
    }
}

impl Presenter for ScriptPresenter {
    fn render_turn(&mut self, turn: Player) {
        self.events.push(ScriptEvent::Turn { player: turn });
    }

    fn render_cell(&mut self, position: Position, cell: Cell) {
        self.events.push(ScriptEvent::Cell {
            index: position.to_index(),
            position,
            mark: cell.mark(),
        });
    }

    fn render_wins(&mut self, player: Player, wins: u32) {
        self.events.push(ScriptEvent::Wins { player, wins });
    }

    fn open_dialog(&mut self, dialog: Dialog) {
        self.dialog = Some(dialog.clone());
        self.events.push(ScriptEvent::DialogOpened { dialog });
    }

    fn close_dialog(&mut self) {
        self.dialog = None;
        self.events.push(ScriptEvent::DialogClosed);
    }
}

/// How events are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One readable line per event.
    Text,
    /// One JSON object per line.
    Json,
}

fn write_events<W: Write>(
    out: &mut W,
    format: OutputFormat,
    events: &[ScriptEvent],
) -> Result<()> {
    for event in events {
        match format {
            OutputFormat::Text => writeln!(out, "{}", event)?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(event)?)?,
        }
    }
    Ok(())
}

/// Plays `steps` against a fresh session and prints every event to `out`.
///
/// Returns the engine as it stands after the last step.
#[instrument(skip(out))]
pub fn run_script<W: Write>(
    steps: &[ScriptStep],
    format: OutputFormat,
    mut out: W,
) -> Result<GameEngine> {
    info!(steps = steps.len(), "Running script");
    let mut controller = GameController::new(ScriptPresenter::new());
    controller.open();
    write_events(&mut out, format, &controller.presenter_mut().drain())?;

    for (i, step) in steps.iter().enumerate() {
        let number = i + 1;
        debug!(number, ?step, "Script step");
        match *step {
            ScriptStep::Select(index) => {
                if let Err(e) = controller.select_cell(index) {
                    controller.presenter_mut().reject(number, e.to_string());
                }
            }
            ScriptStep::Press(player) => {
                let label = player.to_string();
                let commands = controller
                    .presenter()
                    .dialog()
                    .and_then(|d| d.button_for(&label))
                    .map(|b| b.commands().clone());
                match commands {
                    Some(commands) => controller.run(&commands),
                    None => {
                        warn!(number, %player, "No dialog button to press");
                        controller
                            .presenter_mut()
                            .reject(number, format!("no open dialog has a {} button", label));
                    }
                }
            }
            ScriptStep::Dismiss => {
                let commands = controller
                    .presenter()
                    .dialog()
                    .and_then(|d| d.buttons().first())
                    .map(|b| b.commands().clone());
                match commands {
                    Some(commands) => controller.run(&commands),
                    None => controller.presenter_mut().reject(number, "no dialog is open"),
                }
            }
        }
        write_events(&mut out, format, &controller.presenter_mut().drain())?;
    }

    let (engine, _) = controller.into_parts();
    write_events(&mut out, format, &[ScriptEvent::summary(&engine)])?;
    out.flush()?;
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(input: &str) -> Vec<ScriptStep> {
        input.split_whitespace().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_parse_steps() {
        assert_eq!("5".parse::<ScriptStep>(), Ok(ScriptStep::Select(4)));
        assert_eq!("9".parse::<ScriptStep>(), Ok(ScriptStep::Select(8)));
        assert_eq!("x".parse::<ScriptStep>(), Ok(ScriptStep::Press(Player::X)));
        assert_eq!(" O ".parse::<ScriptStep>(), Ok(ScriptStep::Press(Player::O)));
        assert_eq!("OK".parse::<ScriptStep>(), Ok(ScriptStep::Dismiss));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["0", "10", "99", "", "xo", "-1", "maybe"] {
            let err = bad.parse::<ScriptStep>().unwrap_err();
            assert_eq!(err.input, bad);
        }
    }

    #[test]
    fn test_event_text() {
        let event = ScriptEvent::Cell {
            index: 4,
            position: Position::Center,
            mark: Some(Player::O),
        };
        assert_eq!(event.to_string(), "cell 5 (Center): O");
        let dialog = ScriptEvent::DialogOpened {
            dialog: Dialog::tied(),
        };
        assert_eq!(
            dialog.to_string(),
            "dialog [information] Game ended with a tie! | Who should start? | buttons: X, O"
        );
    }

    #[test]
    fn test_script_plays_to_a_win() {
        let mut out = Vec::new();
        let engine = run_script(&steps("x 1 4 2 5 3"), OutputFormat::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(engine.status(), GameStatus::Won(Player::X));
        assert!(text.contains("dialog [success] Player X has won this game!"));
        assert!(text.ends_with("status: won by X, turn: X, moves: 5, wins: X=1 O=0\n"));
    }

    #[test]
    fn test_script_reports_rejections() {
        let mut out = Vec::new();
        run_script(&steps("o 5 5 ok 1 2 4 3 7 9"), OutputFormat::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("step 3: Center is already taken"));
        assert!(text.contains("dialog [error] Oops!"));
        assert!(text.contains("step 10: Game is not in progress"));
    }

    #[test]
    fn test_press_without_dialog() {
        let mut out = Vec::new();
        run_script(&steps("x o"), OutputFormat::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("step 2: no open dialog has a O button"));
    }

    #[test]
    fn test_json_lines() {
        let mut out = Vec::new();
        run_script(&steps("x 1"), OutputFormat::Json, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let events: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(events[0]["event"], "turn");
        assert!(events.iter().any(|e| e["event"] == "dialog_opened"
            && e["dialog"]["tone"] == "information"));
        let last = events.last().unwrap();
        assert_eq!(last["event"], "summary");
        assert_eq!(last["turn"], "O");
        assert_eq!(last["moves"], 1);
    }
}
