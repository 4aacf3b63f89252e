//! Recursive 2×2×2 partitioning of a multiplication sub-problem.
//!
//! For a conceptual 2×2 split of every matrix,
//!
//! ```text
//! | C11 C12 |   | A11 A12 |   | B11 B12 |
//! |         | = |         | · |         |
//! | C21 C22 |   | A21 A22 |   | B21 B22 |
//! ```
//!
//! each quadrant of C receives exactly two products, e.g.
//! `C11 = A11·B11 + A12·B21`. The eight products become eight sub-tiles
//! addressed inside the original buffers.

use crate::matrix::shape::{Shape, Strides, Tile};

/// Halves of one dimension. The odd element goes to `head`, the half
/// adjacent to the origin, so `head >= tail` and `head + tail == n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    pub head: usize,
    pub tail: usize,
}

impl Split {
    pub const fn of(n: usize) -> Self {
        let tail = n / 2;
        Self {
            head: tail + n % 2,
            tail,
        }
    }
}

/// The eight sub-problems of `tile`, in the order
/// `C11 += A11·B11`, `C11 += A12·B21`, `C21 += A21·B11`, `C21 += A22·B21`,
/// `C12 += A11·B12`, `C12 += A12·B22`, `C22 += A21·B12`, `C22 += A22·B22`.
///
/// Some of them are degenerate when a dimension is 1 (its `tail` is 0).
pub fn octants(tile: &Tile, strides: &Strides) -> [Tile; 8] {
    let rows = Split::of(tile.shape.rows);
    let cols = Split::of(tile.shape.cols);
    let k = Split::of(tile.shape.k);

    // Moving down `rows.head` rows is the same step in A and C. Moving
    // right or deeper costs whole columns.
    let row_step = rows.head;
    let a_k_step = k.head * strides.a;
    let b_k_step = k.head;
    let b_col_step = cols.head * strides.b;
    let c_col_step = cols.head * strides.c;

    let (a, b, c) = (tile.a, tile.b, tile.c);
    let sub = |a, b, c, rows, cols, k| Tile {
        a,
        b,
        c,
        shape: Shape::new(rows, cols, k),
    };

    [
        // C11
        sub(a, b, c, rows.head, cols.head, k.head),
        sub(a + a_k_step, b + b_k_step, c, rows.head, cols.head, k.tail),
        // C21
        sub(a + row_step, b, c + row_step, rows.tail, cols.head, k.head),
        sub(
            a + row_step + a_k_step,
            b + b_k_step,
            c + row_step,
            rows.tail,
            cols.head,
            k.tail,
        ),
        // C12
        sub(a, b + b_col_step, c + c_col_step, rows.head, cols.tail, k.head),
        sub(
            a + a_k_step,
            b + b_col_step + b_k_step,
            c + c_col_step,
            rows.head,
            cols.tail,
            k.tail,
        ),
        // C22
        sub(
            a + row_step,
            b + b_col_step,
            c + row_step + c_col_step,
            rows.tail,
            cols.tail,
            k.head,
        ),
        sub(
            a + row_step + a_k_step,
            b + b_col_step + b_k_step,
            c + row_step + c_col_step,
            rows.tail,
            cols.tail,
            k.tail,
        ),
    ]
}
