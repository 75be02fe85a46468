//! Glue between the engine and a presenter.

use super::engine::GameEngine;
use super::outcome::{MoveError, MoveOutcome};
use super::position::Position;
use super::presenter::{Command, Dialog, Presenter};
use super::types::Player;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// Drives one session: forwards selections to the engine and tells the
/// presenter what changed.
#[derive(Debug)]
pub struct GameController<P> {
    engine: GameEngine,
    presenter: P,
}

impl<P: Presenter> GameController<P> {
    /// Creates a controller around a fresh engine.
    pub fn new(presenter: P) -> Self {
        Self::with_engine(GameEngine::new(), presenter)
    }

    /// Creates a controller around an existing engine.
    pub fn with_engine(engine: GameEngine, presenter: P) -> Self {
        Self { engine, presenter }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Returns the presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Returns the presenter mutably.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Consumes the controller, returning its parts.
    pub fn into_parts(self) -> (GameEngine, P) {
        (self.engine, self.presenter)
    }

    /// Renders the whole session and asks who starts.
    #[instrument(skip(self))]
    pub fn open(&mut self) {
        info!("Opening session");
        self.render_board();
        for player in Player::iter() {
            self.presenter.render_wins(player, self.engine.wins(player));
        }
        self.presenter.open_dialog(Dialog::new_game());
    }

    /// Asks who should start a fresh game, keeping the current one until answered.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.presenter.open_dialog(Dialog::new_game());
    }

    /// Handles a selected cell.
    ///
    /// Occupied cells open an error dialog. Selections after the game ended
    /// are dropped without presenter calls. The engine's verdict is returned
    /// either way.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        let mover = self.engine.turn();
        let result = self.engine.submit_move(index);

        match result {
            Ok(outcome) => {
                if let Some(pos) = Position::from_index(index) {
                    self.presenter.render_cell(pos, self.engine.board().get(pos));
                }
                match outcome {
                    MoveOutcome::Continued(next) => self.presenter.render_turn(next),
                    MoveOutcome::Won(winner) => {
                        self.presenter.render_wins(winner, self.engine.wins(winner));
                        self.presenter.open_dialog(Dialog::won(winner));
                    }
                    MoveOutcome::Tied => self.presenter.open_dialog(Dialog::tied()),
                }
                if outcome.is_terminal() {
                    info!(%mover, %outcome, "Game over");
                } else {
                    debug!(%mover, %outcome, "Selection handled");
                }
            }
            Err(MoveError::CellOccupied(_)) => {
                self.presenter.open_dialog(Dialog::cell_taken());
            }
            Err(MoveError::GameInactive) => {
                debug!("Selection after game end dropped");
            }
            Err(MoveError::OutOfRange(_)) => {}
        }

        result
    }

    /// Runs dialog button commands in order.
    #[instrument(skip(self))]
    pub fn run(&mut self, commands: &[Command]) {
        for command in commands {
            match *command {
                Command::StartGame(player) => {
                    self.engine.start_game(player);
                    self.render_board();
                }
                Command::CloseDialog => self.presenter.close_dialog(),
            }
        }
    }

    fn render_board(&mut self) {
        self.presenter.render_turn(self.engine.turn());
        for pos in Position::ALL {
            self.presenter.render_cell(pos, self.engine.board().get(pos));
        }
    }
}
