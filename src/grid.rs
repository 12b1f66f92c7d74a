//! Grid: the fixed occupancy matrix, merge and full-row sweep.

use crate::piece::Shape;
use std::collections::VecDeque;

pub const ROWS: usize = 20;
pub const COLS: usize = 10;

/// Playfield of colour indices. y=0 is top; `rows[y][x]`, 0 = empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    rows: VecDeque<Vec<u8>>,
}

impl Grid {
    pub fn new() -> Self {
        Self {
            width: COLS,
            height: ROWS,
            rows: (0..ROWS).map(|_| vec![0; COLS]).collect(),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Empty every cell. Dimensions are unchanged.
    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.fill(0);
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Write a cell; out-of-range coordinates are ignored.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        if let Some(cell) = self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = value;
        }
    }

    /// True if the cell holds a block. Anything off the grid reads as empty.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        self.get(x as usize, y as usize).is_some_and(|v| v != 0)
    }

    /// True if (x, y) names a cell on the grid.
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    #[cfg(test)]
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        self.rows.get(y).map(Vec::as_slice)
    }

    /// Copy every non-empty cell of `shape` into the grid at the given offset.
    /// The caller has already ruled out collisions; off-grid cells are dropped.
    pub fn merge(&mut self, shape: &Shape, offset_x: i32, offset_y: i32) {
        for (x, y, v) in shape.cells() {
            let (gx, gy) = (offset_x + x as i32, offset_y + y as i32);
            if self.in_bounds(gx, gy) {
                self.set(gx as usize, gy as usize, v);
            }
        }
    }

    /// Remove every full row from the bottom up to row 1, shifting the rows
    /// above down and inserting empty rows at the top. Row 0 is never swept.
    /// Returns the number of rows removed.
    pub fn sweep_full(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = self.height - 1;
        while y > 0 {
            if self.rows[y].iter().all(|&v| v != 0) {
                if let Some(mut row) = self.rows.remove(y) {
                    row.fill(0);
                    self.rows.push_front(row);
                }
                cleared += 1;
                // Rows above shifted into y; look at it again.
            } else {
                y -= 1;
            }
        }
        cleared
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
