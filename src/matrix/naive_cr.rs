use crate::error::Result;
use crate::matrix::validate::check_shapes;
use crate::matrix::view::{MatrixView, MatrixViewMut, offset};

/// Naive matrix multiplication, column-outer / row-inner.
///
/// Same arithmetic as [`matmul_naive_rc`](super::naive_rc::matmul_naive_rc)
/// with the outer loops swapped, so C is written linearly and consecutive
/// rows touch adjacent elements of A. The running sum stays in a register
/// and is stored once per element.
///
/// This is the scalar baseline the blocked kernels are compared against.
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
pub fn matmul_naive_cr(a: &MatrixView, b: &MatrixView, c: &mut MatrixViewMut) -> Result<()> {
    let shape = check_shapes(a, b, c)?;
    let (m, k) = (shape.rows, shape.k);
    let (a, b, c) = (a.as_slice(), b.as_slice(), c.as_mut_slice());

    for col in 0..shape.cols {
        for row in 0..m {
            let mut sum = 0.0f32;
            for i in 0..k {
                sum += a[offset(row, i, m)] * b[offset(i, col, k)];
            }
            c[offset(row, col, m)] = sum;
        }
    }
    Ok(())
}
