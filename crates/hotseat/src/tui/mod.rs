//! Terminal UI for hotseat.

mod input;
mod ui;
mod view;

pub use input::{Action, action_for};
pub use ui::{button_slots, draw, tone_colors};
pub use view::TuiPresenter;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use hotseat_tictactoe::GameController;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument};

use crate::config::HotseatConfig;

/// Coalesces bursts of resize events into at most one redraw per interval.
#[derive(Debug, Clone)]
pub struct ResizeThrottle {
    interval: Duration,
    pending: bool,
    last_draw: Option<Instant>,
}

impl ResizeThrottle {
    /// Creates a throttle allowing one resize redraw per `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: false,
            last_draw: None,
        }
    }

    /// Notes that the terminal was resized.
    pub fn request(&mut self) {
        self.pending = true;
    }

    /// Whether a pending resize should be drawn now.
    pub fn due(&self, now: Instant) -> bool {
        self.pending
            && self
                .last_draw
                .is_none_or(|last| now.duration_since(last) >= self.interval)
    }

    /// Records a redraw, which also satisfies any pending resize.
    pub fn drawn(&mut self, now: Instant) {
        self.pending = false;
        self.last_draw = Some(now);
    }
}

/// Runs the interactive game until the player quits.
pub fn run_tui(config: &HotseatConfig) -> Result<()> {
    info!("Starting hotseat TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Hotseat TUI finished");
    res
}

/// Event loop: draw, wait for input, hand it to the controller.
#[instrument(skip_all)]
fn run_game<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &HotseatConfig,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut controller = GameController::new(TuiPresenter::new(*config.show_cell_numbers()));
    controller.open();

    let mut throttle = ResizeThrottle::new(config.redraw_interval());
    let mut dirty = true;

    loop {
        let now = Instant::now();
        if dirty || throttle.due(now) {
            terminal.draw(|f| draw(f, controller.presenter()))?;
            throttle.drawn(now);
            dirty = false;
        }

        if !event::poll(config.redraw_interval())? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                let dialog_open = controller.presenter().dialog().is_some();
                let action = action_for(key.code, dialog_open);
                debug!(?action, "Key handled");
                if action == Action::Quit {
                    info!("User quit");
                    return Ok(());
                }
                apply(&mut controller, action);
                dirty = true;
            }
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                throttle.request();
            }
            _ => {}
        }
    }
}

/// Applies one action. Board actions only reach here while no dialog is open.
fn apply(controller: &mut GameController<TuiPresenter>, action: Action) {
    match action {
        Action::MoveCursor(d_row, d_col) => controller.presenter_mut().move_cursor(d_row, d_col),
        Action::Select(index) => {
            let _ = controller.select_cell(index);
        }
        Action::SelectCursor => {
            let index = controller.presenter().cursor().to_index();
            let _ = controller.select_cell(index);
        }
        Action::Restart => controller.restart(),
        Action::Focus(delta) => controller.presenter_mut().shift_focus(delta),
        Action::Activate => {
            if let Some(commands) = controller.presenter().focused_commands() {
                controller.run(&commands);
            }
        }
        Action::Press(c) => {
            if let Some(commands) = controller.presenter().commands_for(&c.to_string()) {
                controller.run(&commands);
            }
        }
        Action::Quit | Action::None => {}
    }
}
