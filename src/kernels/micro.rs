//! Scalar block micro-kernels.

use crate::matrix::shape::{Strides, Tile};

/// Computes one tile: C[tile] += A[tile] × B[tile]
///
/// Indexes every element from scratch (`row + i * stride`). This is the
/// inner kernel of the plain tiled multiply and the coarse base case of
/// the cache-oblivious recursion.
///
/// Accumulates into C; the caller is responsible for zeroing it first.
///
/// # Panics
///
/// Panics if the tile reaches outside `a`, `b` or `c`. Tiles produced by
/// the blocked and recursive drivers never do.
pub fn tile_indexed(a: &[f32], b: &[f32], c: &mut [f32], strides: Strides, tile: Tile) {
    let shape = tile.shape;

    for col in 0..shape.cols {
        for row in 0..shape.rows {
            let mut sum = 0.0f32;
            for i in 0..shape.k {
                sum += a[tile.a + row + i * strides.a] * b[tile.b + i + col * strides.b];
            }
            c[tile.c + row + col * strides.c] += sum;
        }
    }
}

/// Same as [`tile_indexed`], with the reduction walking running positions
/// instead of recomputing offsets: A advances by its column stride and B by
/// one element per step.
///
/// The sum is taken in the same order, so results match [`tile_indexed`]
/// bit for bit.
pub fn tile_strided(a: &[f32], b: &[f32], c: &mut [f32], strides: Strides, tile: Tile) {
    let shape = tile.shape;
    if shape.is_degenerate() {
        return;
    }

    for col in 0..shape.cols {
        let b_col = &b[tile.b + col * strides.b..][..shape.k];
        let c_col = &mut c[tile.c + col * strides.c..][..shape.rows];

        for (row, out) in c_col.iter_mut().enumerate() {
            let a_row = a[tile.a + row..].iter().step_by(strides.a);
            *out += a_row
                .zip(b_col)
                .fold(0.0f32, |sum, (&x, &y)| sum + x * y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::shape::Shape;

    // A 3x4, B 4x2 filled with small integers so sums are exact.
    fn operands() -> (Vec<f32>, Vec<f32>, Strides) {
        let a: Vec<f32> = (0..12).map(|i| (i % 5) as f32).collect();
        let b: Vec<f32> = (0..8).map(|i| (i % 3) as f32 - 1.0).collect();
        (a, b, Strides::for_shape(Shape::new(3, 2, 4)))
    }

    fn reference(a: &[f32], b: &[f32]) -> Vec<f32> {
        let mut c = vec![0.0; 6];
        for col in 0..2 {
            for row in 0..3 {
                for i in 0..4 {
                    c[row + col * 3] += a[row + i * 3] * b[i + col * 4];
                }
            }
        }
        c
    }

    #[test]
    fn test_full_tile_matches_reference() {
        let (a, b, strides) = operands();
        let expected = reference(&a, &b);
        let tile = Tile::root(Shape::new(3, 2, 4));

        let mut c = vec![0.0; 6];
        tile_indexed(&a, &b, &mut c, strides, tile);
        assert_eq!(c, expected);

        let mut c = vec![0.0; 6];
        tile_strided(&a, &b, &mut c, strides, tile);
        assert_eq!(c, expected);
    }

    #[test]
    fn test_sub_tile_accumulates() {
        let (a, b, strides) = operands();
        // Rows 1..3, column 1, reduction over 1..3.
        let tile = Tile::at(1, 1, 1, Shape::new(2, 1, 2), strides);

        let mut c_indexed = vec![1.0; 6];
        let mut c_strided = vec![1.0; 6];
        tile_indexed(&a, &b, &mut c_indexed, strides, tile);
        tile_strided(&a, &b, &mut c_strided, strides, tile);
        assert_eq!(c_indexed, c_strided);

        for row in 1..3 {
            let expected: f32 = (1..3).map(|i| a[row + i * 3] * b[i + 4]).sum::<f32>() + 1.0;
            assert_eq!(c_indexed[row + 3], expected);
        }
        // Outside the tile nothing moved.
        assert_eq!(c_indexed[0], 1.0);
        assert_eq!(c_indexed[3], 1.0);
        assert_eq!(c_indexed[1], 1.0);
    }
}
