//! Cache-oblivious divide-and-conquer GEMM.

use crate::error::Result;
use crate::kernels::micro::tile_indexed;
use crate::matrix::shape::{Shape, Strides, Tile};
use crate::matrix::validate::{check_blocked, check_shapes};
use crate::matrix::view::{MatrixView, MatrixViewMut};
use crate::oblivious::partition::octants;

/// Where the recursion stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BaseCase {
    /// Recurse all the way down to single multiply-adds.
    Unit,
    /// Hand any tile that fits in `block_size` to the micro-kernel.
    Block(usize),
}

/// Read-only recursion state. C is passed to every call instead.
struct Recursion<'a> {
    a: &'a [f32],
    b: &'a [f32],
    strides: Strides,
    base: BaseCase,
}

impl Recursion<'_> {
    fn run(&self, c: &mut [f32], tile: Tile) {
        let shape = tile.shape;
        if shape.is_degenerate() {
            return;
        }

        match self.base {
            BaseCase::Unit if shape.is_unit() => {
                c[tile.c] += self.a[tile.a] * self.b[tile.b];
                return;
            }
            BaseCase::Block(block_size) if shape.fits(block_size) => {
                tile_indexed(self.a, self.b, c, self.strides, tile);
                return;
            }
            _ => {}
        }

        // Every non-unit dimension at least halves, so depth is
        // O(log max(m, n, k)).
        for sub in octants(&tile, &self.strides) {
            self.run(c, sub);
        }
    }
}

fn multiply_recursive(
    a: &MatrixView,
    b: &MatrixView,
    c: &mut MatrixViewMut,
    shape: Shape,
    base: BaseCase,
) {
    let recursion = Recursion {
        a: a.as_slice(),
        b: b.as_slice(),
        strides: Strides::for_shape(shape),
        base,
    };

    let c = c.as_mut_slice();
    c.fill(0.0);
    recursion.run(c, Tile::root(shape));
}

/// Cache-oblivious matrix multiplication.
///
/// Recursively halves rows, columns and the reduction (odd element on the
/// origin side) and computes the eight block products of every level in
/// place, down to single elements. No block size is involved: at some
/// depth the sub-problems fit every cache level on their own.
///
/// # Errors
///
/// [`MultiplyError::ShapeMismatch`](crate::MultiplyError::ShapeMismatch) if
/// the dimensions don't line up.
pub fn matmul_cache_oblivious(a: &MatrixView, b: &MatrixView, c: &mut MatrixViewMut) -> Result<()> {
    let shape = check_shapes(a, b, c)?;
    multiply_recursive(a, b, c, shape, BaseCase::Unit);
    Ok(())
}

/// Cache-oblivious multiplication with a coarse base case: once all three
/// dimensions of a sub-problem are at most `block_size`, the indexed
/// micro-kernel finishes it. This cuts the recursion overhead of the pure
/// version by several levels.
///
/// # Errors
///
/// As [`matmul_tiled`](crate::blocked::tiled::matmul_tiled): shape mismatch,
/// zero block size, or a dimension smaller than `block_size`.
pub fn matmul_cache_oblivious_blocked(
    a: &MatrixView,
    b: &MatrixView,
    c: &mut MatrixViewMut,
    block_size: usize,
) -> Result<()> {
    let shape = check_blocked(a, b, c, block_size)?;
    multiply_recursive(a, b, c, shape, BaseCase::Block(block_size));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_recursion_counts_every_product() {
        // All ones: every element of C equals k.
        let (m, n, k) = (5, 3, 7);
        let a = vec![1.0f32; m * k];
        let b = vec![1.0f32; k * n];
        let mut c = vec![-1.0f32; m * n];

        let av = MatrixView::new(&a, m, k).unwrap();
        let bv = MatrixView::new(&b, k, n).unwrap();
        let mut cv = MatrixViewMut::new(&mut c, m, n).unwrap();
        matmul_cache_oblivious(&av, &bv, &mut cv).unwrap();

        assert!(c.iter().all(|&x| x == k as f32));
    }

    #[test]
    fn test_block_base_case_larger_than_problem_is_single_call() {
        let a = vec![2.0f32; 4];
        let b = vec![3.0f32; 4];
        let mut c = vec![0.0f32; 4];

        let av = MatrixView::new(&a, 2, 2).unwrap();
        let bv = MatrixView::new(&b, 2, 2).unwrap();
        let mut cv = MatrixViewMut::new(&mut c, 2, 2).unwrap();
        matmul_cache_oblivious_blocked(&av, &bv, &mut cv, 2).unwrap();

        assert_eq!(c, vec![12.0; 4]);
    }
}
