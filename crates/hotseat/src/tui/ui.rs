//! Stateless UI rendering.

use hotseat_tictactoe::{Cell, Dialog, Player, Position, Tone};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::view::TuiPresenter;

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 4;
const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Draws the whole screen: header, board, footer and any open dialog.
pub fn draw(frame: &mut Frame, view: &TuiPresenter) {
    // The board gets whatever height the header and footer leave.
    let [header, content, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(frame.area());

    draw_header(frame, header, view);
    draw_board(frame, content, view);
    draw_footer(frame, footer, view);

    if let Some(dialog) = view.dialog() {
        draw_dialog(frame, content, dialog, view.focused());
    }
}

fn mark_style(player: Player) -> Style {
    let color = match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_header(frame: &mut Frame, area: Rect, view: &TuiPresenter) {
    let line = Line::from(vec![
        Span::styled(
            "Hotseat Tic-Tac-Toe",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   Turn: "),
        Span::styled(view.turn().to_string(), mark_style(view.turn())),
    ]);
    let header = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::bordered());
    frame.render_widget(header, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, view: &TuiPresenter) {
    let tally = Line::from(vec![
        Span::styled("X", mark_style(Player::X)),
        Span::raw(format!(" wins: {}    ", view.wins(Player::X))),
        Span::styled("O", mark_style(Player::O)),
        Span::raw(format!(" wins: {}", view.wins(Player::O))),
    ]);
    let help = Line::styled(
        "Arrows: move | 1-9/Enter: play | r: restart | q: quit",
        Style::default().fg(Color::DarkGray),
    );
    let footer = Paragraph::new(vec![tally, help])
        .alignment(Alignment::Center)
        .block(Block::bordered());
    frame.render_widget(footer, area);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &TuiPresenter) {
    let [board] = Layout::vertical([Constraint::Length(CELL_HEIGHT * 3)])
        .flex(Flex::Center)
        .areas(area);
    let rows = Layout::vertical([Constraint::Length(CELL_HEIGHT); 3]).split(board);

    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::horizontal([Constraint::Length(CELL_WIDTH); 3])
            .flex(Flex::Center)
            .split(*row_area);
        for (col, cell_area) in cols.iter().enumerate() {
            let pos = Position::ALL[row * 3 + col];
            draw_cell(frame, *cell_area, view, pos);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &TuiPresenter, pos: Position) {
    let span = match view.cell(pos) {
        Cell::Occupied(player) => Span::styled(player.to_string(), mark_style(player)),
        Cell::Empty if view.show_cell_numbers() => Span::styled(
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Empty => Span::raw(" "),
    };

    let border = if pos == view.cursor() {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cell = Paragraph::new(Line::from(span))
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(border));
    frame.render_widget(cell, area);
}

/// Header and background colours for a dialog tone.
pub fn tone_colors(tone: Tone) -> (Color, Color) {
    match tone {
        Tone::Error => (Color::Red, Color::LightRed),
        Tone::Information => (Color::Blue, Color::LightBlue),
        Tone::Success => (Color::Green, Color::LightGreen),
    }
}

/// Horizontal slots for `count` buttons with equal gaps between them.
///
/// Buttons occupy the even slots, so each one spans `1 / (2n - 1)` of the
/// row and the first and last sit flush against the edges.
pub fn button_slots(count: usize) -> Vec<Constraint> {
    let slots = (2 * count).saturating_sub(1).max(1);
    vec![Constraint::Ratio(1, slots as u32); slots]
}

fn draw_dialog(frame: &mut Frame, area: Rect, dialog: &Dialog, focused: usize) {
    let text_width = dialog.header().width().max(dialog.body().width()) as u16;
    let width = (text_width + 8).max(30).min(area.width);
    let height = 9.min(area.height);

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [modal] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);

    let (accent, background) = tone_colors(*dialog.tone());
    let block = Block::bordered()
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(background).fg(Color::Black));
    let inner = block.inner(modal);
    frame.render_widget(Clear, modal);
    frame.render_widget(block, modal);

    let [title, body, buttons] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(3),
    ])
    .spacing(1)
    .areas(inner);

    let header = Paragraph::new(dialog.header().as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).bg(accent).add_modifier(Modifier::BOLD));
    frame.render_widget(header, title);

    let content = Paragraph::new(dialog.body().as_str())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(content, body);

    let slots = Layout::horizontal(button_slots(dialog.buttons().len())).split(buttons);
    for (i, button) in dialog.buttons().iter().enumerate() {
        let Some(slot) = slots.get(i * 2) else {
            break;
        };
        let style = if i == focused {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default()
        };
        let widget = Paragraph::new(button.label().as_str())
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::bordered());
        frame.render_widget(widget, *slot);
    }
}
