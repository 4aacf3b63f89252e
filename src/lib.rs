//! Single-precision matrix multiplication, from the textbook triple loop to
//! a cache-oblivious recursion.
//!
//! I wrote these to see how much of matmul performance is just memory
//! access order. Every kernel computes the same `C = A * B` on caller-owned
//! column-major `f32` buffers; they only differ in how they walk them:
//!
//! - naive row-outer and column-outer loops
//! - fixed-size tiling, with indexed and running-stride micro-kernels
//! - recursive 2×2×2 divide-and-conquer (cache-oblivious), pure or with a
//!   coarse base case
//!
//! ## Usage
//!
//! ```
//! use cache_matmul::{MatrixView, MatrixViewMut, multiply};
//!
//! // [[1, 2], [3, 4]] in column-major order
//! let a = [1.0f32, 3.0, 2.0, 4.0];
//! let mut c = [0.0f32; 4];
//!
//! let av = MatrixView::new(&a, 2, 2).unwrap();
//! let mut cv = MatrixViewMut::new(&mut c, 2, 2).unwrap();
//! multiply(&av, &av, &mut cv).unwrap();
//!
//! assert_eq!(c, [7.0, 15.0, 10.0, 22.0]);
//! ```
//!
//! To run a specific variant, use [`Algorithm`] or call the kernel
//! functions directly.

pub mod algorithm;
pub mod blocked;
pub mod error;
pub mod kernels;
pub mod matrix;
pub mod oblivious;
pub mod timer;

pub use algorithm::Algorithm;
pub use blocked::tiled::{matmul_tiled, matmul_tiled_strided};
pub use error::{MultiplyError, Result, TimerError};
pub use matrix::naive_cr::matmul_naive_cr;
pub use matrix::naive_rc::matmul_naive_rc;
pub use matrix::shape::Shape;
pub use matrix::view::{MatrixView, MatrixViewMut};
pub use oblivious::recursive::{matmul_cache_oblivious, matmul_cache_oblivious_blocked};

use tracing::debug;

/// Matrix multiply: C = A * B
///
/// Picks the fastest variant the shape allows: strided tiling at the tuned
/// block size, else the blocked cache-oblivious kernel, else the
/// column-outer naive loop for matrices smaller than one leaf.
/// Matrices are column-major: A is m×k, B is k×n, C is m×n.
///
/// # Errors
///
/// [`MultiplyError::ShapeMismatch`] if the dimensions don't line up.
pub fn multiply(a: &MatrixView, b: &MatrixView, c: &mut MatrixViewMut) -> Result<()> {
    let shape = matrix::validate::check_shapes(a, b, c)?;
    let smallest = shape.rows.min(shape.cols).min(shape.k);

    let algorithm = if smallest >= blocked::TILE_SIZE_TUNED {
        Algorithm::TiledStrided(blocked::TILE_SIZE_TUNED)
    } else if smallest >= oblivious::LEAF_SIZE {
        Algorithm::CacheObliviousBlocked(oblivious::LEAF_SIZE)
    } else {
        Algorithm::NaiveColumnMajor
    };

    debug!(m = shape.rows, n = shape.cols, k = shape.k, %algorithm, "dispatching multiply");
    algorithm.multiply(a, b, c)
}
