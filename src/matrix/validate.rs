//! Shape checks shared by every kernel entry point.

use crate::error::{MultiplyError, Result};
use crate::matrix::shape::Shape;
use crate::matrix::view::{MatrixView, MatrixViewMut};

/// Checks that A (m×k), B (k×n) and C (m×n) line up and returns the
/// shape triple `(m, n, k)`.
///
/// Zero-sized dimensions are rejected here too.
pub fn check_shapes(a: &MatrixView, b: &MatrixView, c: &MatrixViewMut) -> Result<Shape> {
    let compatible = a.rows() == c.rows() && a.cols() == b.rows() && b.cols() == c.cols();
    let shape = Shape::new(a.rows(), b.cols(), a.cols());

    if !compatible || shape.is_degenerate() {
        return Err(MultiplyError::ShapeMismatch {
            a: (a.rows(), a.cols()),
            b: (b.rows(), b.cols()),
            c: (c.rows(), c.cols()),
        });
    }
    Ok(shape)
}

/// [`check_shapes`] plus the blocking precondition: every dimension must
/// hold at least one full block.
pub fn check_blocked(
    a: &MatrixView,
    b: &MatrixView,
    c: &MatrixViewMut,
    block_size: usize,
) -> Result<Shape> {
    let shape = check_shapes(a, b, c)?;
    if block_size == 0 {
        return Err(MultiplyError::ZeroBlockSize);
    }

    let smallest = shape.rows.min(shape.k).min(shape.cols);
    if smallest < block_size {
        return Err(MultiplyError::BlockTooLarge {
            block_size,
            smallest,
        });
    }
    Ok(shape)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zeros(n: usize) -> Vec<f32> {
        vec![0.0; n]
    }

    #[test]
    fn test_compatible_shapes() {
        let (a, b, mut c) = (zeros(6), zeros(12), zeros(8));
        let a = MatrixView::new(&a, 2, 3).unwrap();
        let b = MatrixView::new(&b, 3, 4).unwrap();
        let c = MatrixViewMut::new(&mut c, 2, 4).unwrap();
        assert_eq!(check_shapes(&a, &b, &c).unwrap(), Shape::new(2, 4, 3));
    }

    #[test]
    fn test_each_mismatch_is_reported() {
        let (a, b) = (zeros(6), zeros(12));
        let a = MatrixView::new(&a, 2, 3).unwrap();
        let b = MatrixView::new(&b, 3, 4).unwrap();

        // C rows differ from A rows
        let mut buf = zeros(12);
        let c = MatrixViewMut::new(&mut buf, 3, 4).unwrap();
        assert!(matches!(
            check_shapes(&a, &b, &c),
            Err(MultiplyError::ShapeMismatch { .. })
        ));

        // A cols differ from B rows
        let bt = MatrixView::new(b.as_slice(), 4, 3).unwrap();
        let mut buf = zeros(6);
        let c = MatrixViewMut::new(&mut buf, 2, 3).unwrap();
        assert!(check_shapes(&a, &bt, &c).is_err());

        // B cols differ from C cols
        let mut buf = zeros(10);
        let c = MatrixViewMut::new(&mut buf, 2, 5).unwrap();
        let err = check_shapes(&a, &b, &c).unwrap_err();
        assert_eq!(
            err,
            MultiplyError::ShapeMismatch {
                a: (2, 3),
                b: (3, 4),
                c: (2, 5)
            }
        );
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let empty: Vec<f32> = Vec::new();
        let a = MatrixView::new(&empty, 0, 3).unwrap();
        let b_buf = zeros(6);
        let b = MatrixView::new(&b_buf, 3, 2).unwrap();
        let mut c_buf: Vec<f32> = Vec::new();
        let c = MatrixViewMut::new(&mut c_buf, 0, 2).unwrap();
        assert!(matches!(
            check_shapes(&a, &b, &c),
            Err(MultiplyError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_block_checks() {
        let (a, b, mut c) = (zeros(12 * 9), zeros(9 * 20), zeros(12 * 20));
        let a = MatrixView::new(&a, 12, 9).unwrap();
        let b = MatrixView::new(&b, 9, 20).unwrap();
        let c = MatrixViewMut::new(&mut c, 12, 20).unwrap();

        assert!(check_blocked(&a, &b, &c, 9).is_ok());
        assert_eq!(
            check_blocked(&a, &b, &c, 10).unwrap_err(),
            MultiplyError::BlockTooLarge {
                block_size: 10,
                smallest: 9
            }
        );
        assert_eq!(
            check_blocked(&a, &b, &c, 0).unwrap_err(),
            MultiplyError::ZeroBlockSize
        );
    }
}
