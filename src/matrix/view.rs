//! Non-owning column-major matrix views.

use crate::error::{MultiplyError, Result};
use nalgebra::DMatrix;

/// Linear offset of `(row, col)` in a column-major buffer with `rows` rows.
#[inline]
pub const fn offset(row: usize, col: usize, rows: usize) -> usize {
    row + col * rows
}

fn check_len(len: usize, rows: usize, cols: usize) -> Result<()> {
    let expected = rows
        .checked_mul(cols)
        .ok_or(MultiplyError::DimensionOverflow { rows, cols })?;
    if len != expected {
        return Err(MultiplyError::BufferSize {
            rows,
            cols,
            expected,
            got: len,
        });
    }
    Ok(())
}

/// Read-only `rows × cols` matrix over a borrowed column-major buffer.
///
/// The column stride is always `rows`; padded layouts are not supported.
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a> {
    data: &'a [f32],
    rows: usize,
    cols: usize,
}

impl<'a> MatrixView<'a> {
    /// Wraps `data` as a `rows × cols` matrix.
    ///
    /// # Errors
    ///
    /// [`MultiplyError::BufferSize`] if `data.len() != rows * cols`, or
    /// [`MultiplyError::DimensionOverflow`] if `rows * cols` overflows.
    pub fn new(data: &'a [f32], rows: usize, cols: usize) -> Result<Self> {
        check_len(data.len(), rows, cols)?;
        Ok(Self { data, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &'a [f32] {
        self.data
    }

    /// Element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        assert!(row < self.rows && col < self.cols, "({row}, {col}) out of bounds");
        self.data[offset(row, col, self.rows)]
    }
}

/// Mutable `rows × cols` matrix over a borrowed column-major buffer.
#[derive(Debug)]
pub struct MatrixViewMut<'a> {
    data: &'a mut [f32],
    rows: usize,
    cols: usize,
}

impl<'a> MatrixViewMut<'a> {
    /// Wraps `data` as a mutable `rows × cols` matrix.
    ///
    /// # Errors
    ///
    /// As [`MatrixView::new`].
    pub fn new(data: &'a mut [f32], rows: usize, cols: usize) -> Result<Self> {
        check_len(data.len(), rows, cols)?;
        Ok(Self { data, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &*self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut *self.data
    }

    /// Reborrows as a read-only view.
    pub fn as_view(&self) -> MatrixView<'_> {
        MatrixView {
            data: &*self.data,
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.as_view().get(row, col)
    }
}

// DMatrix storage is contiguous and column-major, so no length check is needed.
impl<'a> From<&'a DMatrix<f32>> for MatrixView<'a> {
    fn from(m: &'a DMatrix<f32>) -> Self {
        Self {
            data: m.as_slice(),
            rows: m.nrows(),
            cols: m.ncols(),
        }
    }
}

impl<'a> From<&'a mut DMatrix<f32>> for MatrixViewMut<'a> {
    fn from(m: &'a mut DMatrix<f32>) -> Self {
        let (rows, cols) = m.shape();
        Self {
            data: m.as_mut_slice(),
            rows,
            cols,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_major_offset() {
        // 2x2 [[1, 2], [3, 4]] stored as [1, 3, 2, 4]
        let data = [1.0, 3.0, 2.0, 4.0];
        let v = MatrixView::new(&data, 2, 2).unwrap();
        assert_eq!(v.get(0, 0), 1.0);
        assert_eq!(v.get(1, 0), 3.0);
        assert_eq!(v.get(0, 1), 2.0);
        assert_eq!(v.get(1, 1), 4.0);
        assert_eq!(offset(1, 1, 2), 3);
    }

    #[test]
    fn test_buffer_size_rejected() {
        let data = [0.0; 5];
        let err = MatrixView::new(&data, 2, 3).unwrap_err();
        assert_eq!(
            err,
            MultiplyError::BufferSize {
                rows: 2,
                cols: 3,
                expected: 6,
                got: 5
            }
        );

        let mut out = [0.0; 7];
        assert!(MatrixViewMut::new(&mut out, 2, 3).is_err());
    }

    #[test]
    fn test_overflowing_dimensions_rejected() {
        let err = MatrixView::new(&[], 1 << (usize::BITS - 1), 2).unwrap_err();
        assert_eq!(
            err,
            MultiplyError::DimensionOverflow {
                rows: 1 << (usize::BITS - 1),
                cols: 2
            }
        );

        let mut out: [f32; 0] = [];
        assert!(matches!(
            MatrixViewMut::new(&mut out, usize::MAX, 3),
            Err(MultiplyError::DimensionOverflow { .. })
        ));
    }

    #[test]
    fn test_from_dmatrix_keeps_layout() {
        let m = DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let v = MatrixView::from(&m);
        assert_eq!((v.rows(), v.cols()), (2, 3));
        assert_eq!(v.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(v.get(1, 2), 6.0);
    }

    #[test]
    fn test_mut_view_fill() {
        let mut m = DMatrix::<f32>::zeros(3, 2);
        let mut v = MatrixViewMut::from(&mut m);
        v.fill(2.5);
        assert_eq!(v.get(2, 1), 2.5);
        assert_eq!(v.as_view().len(), 6);
        assert!(m.iter().all(|&x| x == 2.5));
    }
}
