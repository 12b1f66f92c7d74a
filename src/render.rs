//! Board to draw commands. Pure: reads the grid and piece, never mutates.

use crate::grid::Grid;
use crate::piece::Piece;

/// Edge length of one grid cell on the logical drawing surface.
pub const BLOCK_SIZE: u16 = 30;

/// One filled, outlined square on the logical surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub x: u16,
    pub y: u16,
    pub size: u16,
    /// Palette index, 0 = background.
    pub color: u8,
}

impl Square {
    fn at_cell(x: usize, y: usize, color: u8) -> Self {
        Self {
            x: x as u16 * BLOCK_SIZE,
            y: y as u16 * BLOCK_SIZE,
            size: BLOCK_SIZE,
            color,
        }
    }

    /// Grid cell this square covers.
    pub fn cell(&self) -> (u16, u16) {
        (self.x / BLOCK_SIZE, self.y / BLOCK_SIZE)
    }
}

/// Size (width, height) of the logical surface for a grid.
pub fn surface_size(grid: &Grid) -> (u16, u16) {
    (
        grid.width() as u16 * BLOCK_SIZE,
        grid.height() as u16 * BLOCK_SIZE,
    )
}

/// Every grid cell in row-major order, then the active piece's cells on top.
pub fn draw_commands(grid: &Grid, piece: &Piece) -> Vec<Square> {
    let mut out = Vec::with_capacity(grid.width() * grid.height() + 4);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            out.push(Square::at_cell(x, y, grid.get(x, y).unwrap_or(0)));
        }
    }
    out.extend(
        piece
            .grid_cells()
            .filter(|&(x, y, _)| grid.in_bounds(x, y))
            .map(|(x, y, v)| Square::at_cell(x as usize, y as usize, v)),
    );
    out
}
