//! Collision test between a shape at an offset and the grid.

use crate::grid::Grid;
use crate::piece::Shape;

/// True if any non-empty cell of `shape`, placed with its top-left corner at
/// (offset_x, offset_y), lands on an occupied grid cell or off the grid.
pub fn collide(grid: &Grid, shape: &Shape, offset_x: i32, offset_y: i32) -> bool {
    shape.cells().any(|(x, y, _)| {
        let (gx, gy) = (offset_x + x as i32, offset_y + y as i32);
        !grid.in_bounds(gx, gy) || grid.is_occupied(gx, gy)
    })
}
