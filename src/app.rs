//! App: terminal init, main loop, tick and input handling.

use crate::game::{DropOutcome, GameState, SpawnOutcome};
use crate::input::{Action, key_to_action};
use crate::theme::Theme;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};
use tachyonfx::Effect;

/// Gravity period: one automatic drop per second.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

pub struct App {
    theme: Theme,
    state: GameState,
    last_tick: Instant,
    /// Most recent line-clear message; None until the first clear.
    message: Option<&'static str>,
    message_fade: Option<Effect>,
    message_fade_time: Option<Instant>,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        Self::with_state(theme, GameState::new())
    }

    fn with_state(theme: Theme, state: GameState) -> Self {
        Self {
            theme,
            state,
            last_tick: Instant::now(),
            message: None,
            message_fade: None,
            message_fade_time: None,
        }
    }

    /// Apply one action. Returns false when the player asked to quit.
    fn apply_action(&mut self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.state.move_left(),
            Action::MoveRight => self.state.move_right(),
            Action::Rotate => self.state.rotate(),
            Action::Drop => self.drop_piece(),
            Action::Quit => return false,
            Action::None => {}
        }
        true
    }

    /// Shared by the gravity tick and the drop key.
    fn drop_piece(&mut self) {
        if let DropOutcome::Settled {
            spawn,
            cleared,
            message,
        } = self.state.drop()
        {
            log::debug!("piece settled, {} row(s) cleared", cleared);
            if spawn == SpawnOutcome::BoardReset {
                log::debug!("board reset; play continues");
            }
            if let Some(message) = message {
                self.show_message(message);
            }
        }
    }

    /// Run the gravity drop if a full interval has passed since the last one.
    /// Returns true when a drop happened.
    fn on_tick(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_tick) < TICK_INTERVAL {
            return false;
        }
        self.last_tick = now;
        self.drop_piece();
        true
    }

    fn show_message(&mut self, message: &'static str) {
        self.message = Some(message);
        self.message_fade = Some(crate::ui::message_fade(&self.theme));
        self.message_fade_time = None;
    }

    pub fn run(&mut self) -> Result<()> {
        use crossterm::{
            event::{DisableMouseCapture, EnableMouseCapture},
            execute,
            terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
        };

        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

        let result = ratatui::DefaultTerminal::new(ratatui::backend::CrosstermBackend::new(stdout))
            .map_err(anyhow::Error::from)
            .and_then(|mut terminal| self.run_loop(&mut terminal));

        // Restore
        execute!(std::io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
        disable_raw_mode()?;

        result
    }

    fn run_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        log::info!("game started");
        self.last_tick = Instant::now();
        loop {
            let now = Instant::now();
            let mut area = Rect::default();
            terminal.draw(|f| {
                area = f.area();
                crate::ui::draw(
                    f,
                    &self.state,
                    &self.theme,
                    self.message,
                    &mut self.message_fade,
                    &mut self.message_fade_time,
                    now,
                );
            })?;

            if self.message_fade.as_ref().is_some_and(Effect::done) {
                self.message_fade = None;
                self.message_fade_time = None;
            }

            if self.on_tick(Instant::now()) {
                continue;
            }

            // Poll no longer than the next tick; keep frames coming while a fade runs.
            let until_tick = TICK_INTERVAL.saturating_sub(self.last_tick.elapsed());
            let timeout = if self.message_fade.is_some() {
                until_tick.min(Duration::from_millis(16))
            } else {
                until_tick
            };

            // One event per iteration so every mutation is followed by a redraw.
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if !self.apply_action(key_to_action(key)) {
                            log::info!("quit");
                            return Ok(());
                        }
                    }
                    Event::Mouse(MouseEvent {
                        kind: MouseEventKind::Down(MouseButton::Left),
                        column,
                        row,
                        ..
                    }) => {
                        let regions = crate::ui::regions(area, &self.state.grid);
                        if let Some(control) = crate::ui::control_at(&regions, column, row) {
                            self.apply_action(control.action());
                        }
                    }
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifier::MESSAGES;
    use crate::piece::{Piece, PieceKind};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app() -> App {
        let theme = Theme::load().unwrap();
        App::with_state(theme, GameState::with_rng(StdRng::seed_from_u64(3)))
    }

    #[test]
    fn quit_stops_and_moves_continue() {
        let mut app = app();
        assert!(!app.apply_action(Action::Quit));
        assert!(app.apply_action(Action::None));
        assert!(app.apply_action(Action::Drop));
        assert_eq!(app.state.piece.y, 1);
    }

    #[test]
    fn clear_sets_message_and_starts_fade() {
        let mut app = app();
        for x in 2..app.state.grid.width() {
            app.state.grid.set(x, 19, 1);
        }
        let mut piece = Piece::spawn(PieceKind::O, app.state.grid.width());
        piece.x = 0;
        piece.y = 18;
        app.state.piece = piece;

        assert!(app.message.is_none());
        app.apply_action(Action::Drop);
        assert_eq!(app.message, Some(MESSAGES[0]));
        assert!(app.message_fade.is_some());
        assert!(app.message_fade_time.is_none());
    }

    #[test]
    fn due_tick_drops_one_row() {
        let mut app = app();
        let start = app.last_tick;
        let y = app.state.piece.y;
        assert!(app.on_tick(start + TICK_INTERVAL));
        assert_eq!(app.state.piece.y, y + 1);
        assert_eq!(app.last_tick, start + TICK_INTERVAL);
    }

    #[test]
    fn early_tick_does_nothing() {
        let mut app = app();
        let start = app.last_tick;
        let piece = app.state.piece.clone();
        assert!(!app.on_tick(start + TICK_INTERVAL - Duration::from_millis(1)));
        assert!(!app.on_tick(start));
        assert_eq!(app.state.piece, piece);
        assert_eq!(app.last_tick, start);
    }

    #[test]
    fn ticks_continue_after_board_reset() {
        let mut app = app();
        // Every spawn position overlaps these blocks.
        for y in 0..4 {
            for x in 2..app.state.grid.width() {
                app.state.grid.set(x, y, 1);
            }
        }
        let mut piece = Piece::spawn(PieceKind::O, app.state.grid.width());
        piece.x = 0;
        piece.y = 18;
        app.state.piece = piece;

        let start = app.last_tick;
        assert!(app.on_tick(start + TICK_INTERVAL));
        assert_eq!(app.state.grid, crate::grid::Grid::new());
        assert_eq!(app.state.piece.y, 0);

        assert!(app.on_tick(start + TICK_INTERVAL * 2));
        assert_eq!(app.state.piece.y, 1);
        assert!(app.message.is_none());
    }
}
