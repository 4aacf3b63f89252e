//! Shape triples and sub-problem descriptors shared by every kernel.

/// Dimensions of a (sub)multiplication: `rows` of C and A, `cols` of C and
/// B, and the shared reduction length `k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
    pub k: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize, k: usize) -> Self {
        Self { rows, cols, k }
    }

    /// A zero-sized partition contributes nothing to C.
    pub const fn is_degenerate(&self) -> bool {
        self.rows == 0 || self.cols == 0 || self.k == 0
    }

    pub const fn is_unit(&self) -> bool {
        self.rows == 1 && self.cols == 1 && self.k == 1
    }

    /// True when every dimension is at most `block_size`.
    pub const fn fits(&self, block_size: usize) -> bool {
        self.rows <= block_size && self.cols <= block_size && self.k <= block_size
    }

    /// Multiply-add count, `2·m·n·k`.
    pub fn flops(&self) -> f64 {
        2.0 * (self.rows * self.cols * self.k) as f64
    }
}

/// Column strides of the three top-level buffers. With unpadded
/// column-major storage these are the row counts of A, B and C.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strides {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Strides {
    /// Strides for a top-level problem of the given shape.
    pub const fn for_shape(shape: Shape) -> Self {
        Self {
            a: shape.rows,
            b: shape.k,
            c: shape.rows,
        }
    }
}

/// One sub-problem: origin offsets into A, B and C plus its extent. The
/// submatrices are never copied; they are addressed through the parent
/// buffers and [`Strides`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub shape: Shape,
}

impl Tile {
    /// The whole problem, anchored at offset 0 of every buffer.
    pub const fn root(shape: Shape) -> Self {
        Self {
            a: 0,
            b: 0,
            c: 0,
            shape,
        }
    }

    /// Tile covering rows `row..row+shape.rows` and columns
    /// `col..col+shape.cols` of C, reducing over `depth..depth+shape.k`.
    pub const fn at(row: usize, col: usize, depth: usize, shape: Shape, strides: Strides) -> Self {
        Self {
            a: row + depth * strides.a,
            b: depth + col * strides.b,
            c: row + col * strides.c,
            shape,
        }
    }

    /// Highest linear index the tile touches in A, B and C, or `None` for
    /// a degenerate tile that touches nothing.
    pub const fn last_indices(&self, strides: Strides) -> Option<(usize, usize, usize)> {
        if self.shape.is_degenerate() {
            return None;
        }
        let Shape { rows, cols, k } = self.shape;
        Some((
            self.a + (rows - 1) + (k - 1) * strides.a,
            self.b + (k - 1) + (cols - 1) * strides.b,
            self.c + (rows - 1) + (cols - 1) * strides.c,
        ))
    }
}
