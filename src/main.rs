//! blockdrop: single-screen falling-block puzzle game in the terminal.

mod app;
mod collision;
mod game;
mod grid;
mod input;
mod logging;
mod notifier;
mod piece;
mod render;
mod theme;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;

fn main() -> Result<()> {
    let _args = Args::parse();

    let log_path = logging::default_path();
    if let Err(e) = logging::init(&log_path, log::LevelFilter::Debug) {
        eprintln!("blockdrop: logging disabled: {e}");
    }

    let theme = theme::Theme::load().context("built-in palette")?;
    let mut app = App::new(theme);
    app.run()
}

/// Falling-block puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "blockdrop",
    version,
    about = "Single-screen falling-block puzzle in the terminal. Clear full rows; when a new piece no longer fits, the board resets.",
    long_about = "blockdrop is a terminal falling-block puzzle.\n\n\
        Pieces fall one row per second. Fill a row edge to edge to clear it; every clear \
        shows the next message under the board. When a new piece cannot be placed the \
        board is wiped and play continues.\n\n\
        CONTROLS:\n  Left/Right  Move    Down       Drop one row\n  Up / Enter  Rotate  Q / Esc    Quit\n\n\
        The left, right, down and rotate buttons under the board can be clicked with the mouse."
)]
pub struct Args {}
