//! Micro-kernels for the inner loop of the blocked and recursive multiplies.
//!
//! Each kernel computes one tile of C += A × B directly on the caller's
//! column-major buffers, addressed through a [`Tile`](crate::matrix::shape::Tile)
//! and the parent [`Strides`](crate::matrix::shape::Strides). Nothing is packed
//! or copied.
//!
//! Available kernels:
//! - `tile_indexed`: recomputes every offset
//! - `tile_strided`: running positions along the reduction

pub mod micro;
