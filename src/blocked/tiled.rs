//! Fixed-size tiled GEMM.

use crate::error::Result;
use crate::kernels::micro::{tile_indexed, tile_strided};
use crate::matrix::shape::{Shape, Strides, Tile};
use crate::matrix::validate::check_blocked;
use crate::matrix::view::{MatrixView, MatrixViewMut};

/// Signature shared by the micro-kernels in [`crate::kernels::micro`].
pub type MicroKernel = fn(&[f32], &[f32], &mut [f32], Strides, Tile);

/// Tiled matrix multiplication using the indexed micro-kernel.
///
/// Splits rows, columns and the reduction into `block_size` tiles (the last
/// tile in each dimension is clipped to what's left) and runs the
/// micro-kernel on every block triple. C is zeroed first, then each
/// reduction block adds its share.
///
/// # Errors
///
/// - [`MultiplyError::ShapeMismatch`](crate::MultiplyError::ShapeMismatch) on
///   incompatible dimensions
/// - [`MultiplyError::BlockTooLarge`](crate::MultiplyError::BlockTooLarge) if
///   any dimension is smaller than `block_size`
/// - [`MultiplyError::ZeroBlockSize`](crate::MultiplyError::ZeroBlockSize) for
///   `block_size == 0`
pub fn matmul_tiled(
    a: &MatrixView,
    b: &MatrixView,
    c: &mut MatrixViewMut,
    block_size: usize,
) -> Result<()> {
    let shape = check_blocked(a, b, c, block_size)?;
    run_tiles(a, b, c, shape, block_size, tile_indexed);
    Ok(())
}

/// Same blocking as [`matmul_tiled`], with the running-stride micro-kernel
/// in the inner loop. `block_size = 50` was the sweet spot on the machine
/// this was tuned on, see [`TILE_SIZE_TUNED`](super::TILE_SIZE_TUNED).
pub fn matmul_tiled_strided(
    a: &MatrixView,
    b: &MatrixView,
    c: &mut MatrixViewMut,
    block_size: usize,
) -> Result<()> {
    let shape = check_blocked(a, b, c, block_size)?;
    run_tiles(a, b, c, shape, block_size, tile_strided);
    Ok(())
}

// Block loop order: columns of C, then rows of C, then the reduction.
fn run_tiles(
    a: &MatrixView,
    b: &MatrixView,
    c: &mut MatrixViewMut,
    shape: Shape,
    block_size: usize,
    kernel: MicroKernel,
) {
    let strides = Strides::for_shape(shape);
    let (a, b) = (a.as_slice(), b.as_slice());
    let c = c.as_mut_slice();
    c.fill(0.0);

    for col in (0..shape.cols).step_by(block_size) {
        let width = block_size.min(shape.cols - col);

        for row in (0..shape.rows).step_by(block_size) {
            let height = block_size.min(shape.rows - row);

            for depth in (0..shape.k).step_by(block_size) {
                let span = block_size.min(shape.k - depth);

                let tile = Tile::at(row, col, depth, Shape::new(height, width, span), strides);
                kernel(a, b, c, strides, tile);
            }
        }
    }
}
