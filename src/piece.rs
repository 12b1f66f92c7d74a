//! Pieces: the seven prototype shapes, the rotation transform and the active piece.

/// Number of distinct piece kinds (and non-background colour indices).
pub const KIND_COUNT: usize = 7;

/// Tetromino kinds, in colour-index order (I = 1 .. T = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    I,
    S,
    Z,
    J,
    L,
    O,
    T,
}

impl PieceKind {
    pub const ALL: [Self; KIND_COUNT] = [Self::I, Self::S, Self::Z, Self::J, Self::L, Self::O, Self::T];

    /// Colour index written into the grid for this kind (1..=7).
    pub fn color_index(self) -> u8 {
        match self {
            Self::I => 1,
            Self::S => 2,
            Self::Z => 3,
            Self::J => 4,
            Self::L => 5,
            Self::O => 6,
            Self::T => 7,
        }
    }

    /// Fresh copy of the prototype matrix for this kind, cells tagged with its colour.
    pub fn prototype(self) -> Shape {
        let mask: &[&[u8]] = match self {
            Self::I => &[&[1, 1, 1, 1]],
            Self::S => &[&[0, 1, 1], &[1, 1, 0]],
            Self::Z => &[&[1, 1, 0], &[0, 1, 1]],
            Self::J => &[&[1, 0, 0], &[1, 1, 1]],
            Self::L => &[&[0, 0, 1], &[1, 1, 1]],
            Self::O => &[&[1, 1], &[1, 1]],
            Self::T => &[&[0, 1, 0], &[1, 1, 1]],
        };
        let color = self.color_index();
        Shape {
            rows: mask
                .iter()
                .map(|row| row.iter().map(|&m| m * color).collect())
                .collect(),
        }
    }
}

/// Rectangular matrix of cells; 0 is empty, anything else is a colour index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    rows: Vec<Vec<u8>>,
}

impl Shape {
    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    #[cfg(test)]
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Non-empty cells as (x, y, colour) relative to the shape's top-left corner.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &v)| v != 0)
                .map(move |(x, &v)| (x, y, v))
        })
    }
}

/// Quarter turn: transpose, then reverse the row order.
///
/// A `h x w` input yields a `w x h` output with `new[w-1-x][y] = old[y][x]`.
/// Pure; legality against the grid is the caller's business.
pub fn rotate(shape: &Shape) -> Shape {
    let (h, w) = (shape.height(), shape.width());
    let rows = (0..w)
        .rev()
        .map(|x| (0..h).map(|y| shape.rows[y][x]).collect())
        .collect();
    Shape { rows }
}

/// The falling piece: a (possibly rotated) shape and its top-left offset in grid cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Prototype of `kind` centred horizontally on a grid `cols` wide, at the top row.
    pub fn spawn(kind: PieceKind, cols: usize) -> Self {
        let shape = kind.prototype();
        let x = (cols / 2) as i32 - (shape.width() / 2) as i32;
        Self { kind, shape, x, y: 0 }
    }

    /// Non-empty cells in grid coordinates, with their colour.
    pub fn grid_cells(&self) -> impl Iterator<Item = (i32, i32, u8)> + '_ {
        self.shape
            .cells()
            .map(|(x, y, v)| (self.x + x as i32, self.y + y as i32, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prototype_matrices() {
        assert_eq!(PieceKind::I.prototype().rows(), &[vec![1, 1, 1, 1]]);
        assert_eq!(PieceKind::S.prototype().rows(), &[vec![0, 2, 2], vec![2, 2, 0]]);
        assert_eq!(PieceKind::Z.prototype().rows(), &[vec![3, 3, 0], vec![0, 3, 3]]);
        assert_eq!(PieceKind::J.prototype().rows(), &[vec![4, 0, 0], vec![4, 4, 4]]);
        assert_eq!(PieceKind::L.prototype().rows(), &[vec![0, 0, 5], vec![5, 5, 5]]);
        assert_eq!(PieceKind::O.prototype().rows(), &[vec![6, 6], vec![6, 6]]);
        assert_eq!(PieceKind::T.prototype().rows(), &[vec![0, 7, 0], vec![7, 7, 7]]);
    }

    #[test]
    fn prototypes_are_tagged_with_their_colour() {
        for kind in PieceKind::ALL {
            let shape = kind.prototype();
            assert_eq!(shape.cells().count(), 4, "{kind:?}");
            assert!(shape.cells().all(|(_, _, v)| v == kind.color_index()));
        }
    }

    #[test]
    fn rotate_i_becomes_vertical() {
        let rotated = rotate(&PieceKind::I.prototype());
        assert_eq!(rotated.rows(), &[vec![1], vec![1], vec![1], vec![1]]);
    }

    #[test]
    fn rotate_is_transpose_then_row_reverse() {
        let rotated = rotate(&PieceKind::S.prototype());
        assert_eq!(rotated.rows(), &[vec![2, 0], vec![2, 2], vec![0, 2]]);

        let rotated = rotate(&PieceKind::J.prototype());
        assert_eq!(rotated.rows(), &[vec![0, 4], vec![0, 4], vec![4, 4]]);
    }

    #[test]
    fn four_rotations_are_identity() {
        for kind in PieceKind::ALL {
            let original = kind.prototype();
            let mut shape = original.clone();
            for _ in 0..4 {
                shape = rotate(&shape);
            }
            assert_eq!(shape, original, "{kind:?}");
        }
    }

    #[test]
    fn rotate_leaves_input_untouched() {
        let original = PieceKind::T.prototype();
        let _ = rotate(&original);
        assert_eq!(original, PieceKind::T.prototype());
    }

    #[test]
    fn spawn_centres_piece() {
        let i = Piece::spawn(PieceKind::I, 10);
        assert_eq!((i.x, i.y), (3, 0));
        let o = Piece::spawn(PieceKind::O, 10);
        assert_eq!(o.x, 4);
        let t = Piece::spawn(PieceKind::T, 10);
        assert_eq!(t.x, 4);
    }

    #[test]
    fn grid_cells_apply_offset() {
        let mut o = Piece::spawn(PieceKind::O, 10);
        o.y = 3;
        let cells: Vec<_> = o.grid_cells().collect();
        assert_eq!(cells, vec![(4, 3, 6), (5, 3, 6), (4, 4, 6), (5, 4, 6)]);
    }
}
