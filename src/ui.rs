//! Layout and drawing: board, on-screen controls, line-clear message.

use crate::game::GameState;
use crate::grid::Grid;
use crate::input::Control;
use crate::render::{BLOCK_SIZE, Square, draw_commands, surface_size};
use crate::theme::Theme;
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};
use std::time::Instant;
use tachyonfx::{Duration as TfxDuration, Effect, EffectRenderer, Interpolation, fx};

/// Terminal columns per grid cell (cells are roughly twice as tall as wide).
const CELL_WIDTH: u16 = 2;
const BUTTON_HEIGHT: u16 = 3;
const MESSAGE_HEIGHT: u16 = 4;
/// Width of the centred column holding board, controls and message.
const COLUMN_WIDTH: u16 = 48;

/// Duration of the message fade-in, in ms.
const MESSAGE_FADE_MS: u32 = 600;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    /// Board including its border.
    pub board: Rect,
    pub buttons: [(Control, Rect); 4],
    pub message: Rect,
}

/// Board size in terminal cells, border included.
fn board_outer_size(grid: &Grid) -> (u16, u16) {
    let (w, h) = surface_size(grid);
    (w / BLOCK_SIZE * CELL_WIDTH + 2, h / BLOCK_SIZE + 2)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Split `area` into board, control buttons and message panel, centred.
pub fn regions(area: Rect, grid: &Grid) -> Regions {
    let (bw, bh) = board_outer_size(grid);
    let column = centered(
        area,
        COLUMN_WIDTH.max(bw),
        bh + BUTTON_HEIGHT + MESSAGE_HEIGHT,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(bh),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(MESSAGE_HEIGHT),
        ])
        .split(column);

    let board = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(bw),
            Constraint::Fill(1),
        ])
        .split(rows[0])[1];

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[1]);
    let buttons = std::array::from_fn(|i| (Control::ALL[i], cols[i]));

    Regions {
        board,
        buttons,
        message: rows[2],
    }
}

/// Control whose button covers the terminal position, if any.
pub fn control_at(regions: &Regions, column: u16, row: u16) -> Option<Control> {
    regions
        .buttons
        .iter()
        .find(|(_, rect)| rect.contains(Position { x: column, y: row }))
        .map(|&(control, _)| control)
}

/// Effect played when a new line-clear message appears.
pub fn message_fade(theme: &Theme) -> Effect {
    let bg = theme.background();
    fx::fade_from(bg, bg, (MESSAGE_FADE_MS, Interpolation::Linear))
}

/// Draw one frame. `message_fade` is advanced by the time since `fade_time`.
pub fn draw(
    frame: &mut Frame,
    state: &GameState,
    theme: &Theme,
    message: Option<&str>,
    message_fade: &mut Option<Effect>,
    fade_time: &mut Option<Instant>,
    now: Instant,
) {
    let regions = regions(frame.area(), &state.grid);
    draw_board(frame.buffer_mut(), state, theme, regions.board);
    draw_buttons(frame.buffer_mut(), theme, &regions.buttons);
    draw_message(frame.buffer_mut(), theme, message, regions.message);

    if let Some(effect) = message_fade {
        let delta = fade_time
            .map(|t| now.saturating_duration_since(t))
            .unwrap_or(std::time::Duration::ZERO);
        let delta_ms = delta.as_millis().min(u32::MAX as u128) as u32;
        *fade_time = Some(now);
        frame.render_effect(effect, regions.message, TfxDuration::from_millis(delta_ms));
    }
}

fn draw_board(buf: &mut Buffer, state: &GameState, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.outline))
        .title(Span::styled(" blockdrop ", Style::default().fg(theme.title)));
    let inner = block.inner(area);
    block.render(area, buf);

    for square in draw_commands(&state.grid, &state.piece) {
        paint_square(buf, theme, inner, square);
    }
}

/// One square scaled to terminal cells: fill colour behind a bracket outline.
fn paint_square(buf: &mut Buffer, theme: &Theme, inner: Rect, square: Square) {
    let (cx, cy) = square.cell();
    let span = (square.size / BLOCK_SIZE).max(1);
    let (x0, y0) = (inner.x + cx * CELL_WIDTH, inner.y + cy);
    let (x1, y1) = (
        (x0 + span * CELL_WIDTH).min(inner.right()),
        (y0 + span).min(inner.bottom()),
    );
    let fill = theme.cell_color(square.color);
    let stroke = if square.color == 0 {
        theme.outline
    } else {
        theme.background()
    };
    let style = Style::default().fg(stroke).bg(fill);
    let (left, right) = if square.color == 0 { (" ", "·") } else { ("[", "]") };
    for y in y0..y1 {
        for x in x0..x1 {
            let symbol = if (x - x0) % CELL_WIDTH == 0 { left } else { right };
            buf[(x, y)].set_symbol(symbol).set_style(style);
        }
    }
}

fn draw_buttons(buf: &mut Buffer, theme: &Theme, buttons: &[(Control, Rect); 4]) {
    for &(control, rect) in buttons {
        Paragraph::new(Line::from(Span::styled(
            control.name(),
            Style::default().fg(theme.text),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.outline)),
        )
        .render(rect, buf);
    }
}

fn draw_message(buf: &mut Buffer, theme: &Theme, message: Option<&str>, area: Rect) {
    Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(theme.title))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.outline))
                .title(Span::styled(" q: quit ", Style::default().fg(theme.text))),
        )
        .render(area, buf);
}
