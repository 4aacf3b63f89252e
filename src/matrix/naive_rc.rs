use crate::error::Result;
use crate::matrix::validate::check_shapes;
use crate::matrix::view::{MatrixView, MatrixViewMut, offset};

/// Naive matrix multiplication, row-outer / column-inner.
///
/// This is the textbook triple loop. Walking C row by row means every step
/// of the middle loop jumps a whole column ahead in C, and the inner loop
/// reads A with stride `m`. With column-major storage that is close to the
/// worst order available.
///
/// Use this as a correctness baseline, not for performance.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), column-major
/// * `b` - Matrix B (k × n), column-major
/// * `c` - Matrix C (m × n), column-major, overwritten (C = A * B)
///
/// # Errors
///
/// [`MultiplyError::ShapeMismatch`](crate::MultiplyError::ShapeMismatch) if
/// the dimensions don't line up. C is untouched in that case.
pub fn matmul_naive_rc(a: &MatrixView, b: &MatrixView, c: &mut MatrixViewMut) -> Result<()> {
    let shape = check_shapes(a, b, c)?;
    let (m, k) = (shape.rows, shape.k);
    let (a, b, c) = (a.as_slice(), b.as_slice(), c.as_mut_slice());

    for row in 0..m {
        for col in 0..shape.cols {
            let dst = offset(row, col, m);
            c[dst] = 0.0;
            for i in 0..k {
                c[dst] += a[offset(row, i, m)] * b[offset(i, col, k)];
            }
        }
    }
    Ok(())
}
