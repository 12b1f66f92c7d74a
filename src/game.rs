//! Game state: grid, active piece, message cursor; move, rotate, drop, spawn.

use crate::collision::collide;
use crate::grid::Grid;
use crate::notifier::Notifier;
use crate::piece::{rotate, Piece, PieceKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of placing a new piece at the top of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    Continuing,
    /// The new piece overlapped the stack; the grid was wiped.
    BoardReset,
}

/// Result of one drop step (timer tick or soft drop).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row.
    Falling,
    /// The piece could not move, was merged into the grid and replaced.
    Settled {
        spawn: SpawnOutcome,
        cleared: usize,
        /// Next line-clear message, present iff `cleared > 0`.
        message: Option<&'static str>,
    },
}

/// Game state: grid, current piece, message cursor and the piece RNG.
#[derive(Debug)]
pub struct GameState {
    pub grid: Grid,
    pub piece: Piece,
    pub notifier: Notifier,
    rng: StdRng,
}

impl GameState {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Game with an explicit RNG (deterministic piece order for a given seed).
    pub fn with_rng(rng: StdRng) -> Self {
        let grid = Grid::new();
        let piece = Piece::spawn(PieceKind::I, grid.width());
        let mut state = Self {
            grid,
            piece,
            notifier: Notifier::new(),
            rng,
        };
        state.spawn();
        state
    }

    /// Replace the active piece with a uniformly random prototype at the top centre.
    /// If it overlaps the stack the grid is cleared; the new piece stays active.
    pub fn spawn(&mut self) -> SpawnOutcome {
        let kind = PieceKind::ALL[self.rng.random_range(0..PieceKind::ALL.len())];
        self.spawn_kind(kind)
    }

    fn spawn_kind(&mut self, kind: PieceKind) -> SpawnOutcome {
        self.piece = Piece::spawn(kind, self.grid.width());
        log::debug!("spawn {:?} at x={}", kind, self.piece.x);
        if collide(&self.grid, &self.piece.shape, self.piece.x, self.piece.y) {
            log::info!("spawn of {:?} blocked, board reset", kind);
            self.grid.clear();
            return SpawnOutcome::BoardReset;
        }
        SpawnOutcome::Continuing
    }

    /// Shift the piece sideways by `dx`; a blocked move is silently undone.
    pub fn move_horizontal(&mut self, dx: i32) {
        let piece = &mut self.piece;
        piece.x += dx;
        if collide(&self.grid, &piece.shape, piece.x, piece.y) {
            piece.x -= dx;
        }
    }

    pub fn move_left(&mut self) {
        self.move_horizontal(-1);
    }

    pub fn move_right(&mut self) {
        self.move_horizontal(1);
    }

    /// Turn the piece a quarter in place; no wall kicks, rejected if it would collide.
    pub fn rotate(&mut self) {
        let rotated = rotate(&self.piece.shape);
        if !collide(&self.grid, &rotated, self.piece.x, self.piece.y) {
            self.piece.shape = rotated;
        }
    }

    /// Move the piece down one row, or settle it: merge, spawn the next piece,
    /// sweep full rows and advance the message cursor if anything cleared.
    /// Both the gravity tick and the player's drop key land here.
    pub fn drop(&mut self) -> DropOutcome {
        self.piece.y += 1;
        if !collide(&self.grid, &self.piece.shape, self.piece.x, self.piece.y) {
            return DropOutcome::Falling;
        }
        self.piece.y -= 1;
        self.grid.merge(&self.piece.shape, self.piece.x, self.piece.y);

        let spawn = self.spawn();
        let cleared = self.grid.sweep_full();
        let message = (cleared > 0).then(|| {
            log::info!("cleared {} row(s), message {}", cleared, self.notifier.cursor());
            self.notifier.next()
        });
        DropOutcome::Settled {
            spawn,
            cleared,
            message,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
