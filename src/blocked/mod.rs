//! Cache-blocked (tiled) GEMM.
//!
//! These functions break the multiplication into `block_size` tiles along
//! all three dimensions so each block triple's working set stays in cache,
//! then call a micro-kernel on it.
//!
//! Available implementations:
//! - `matmul_tiled`: indexed micro-kernel
//! - `matmul_tiled_strided`: running-stride micro-kernel

pub mod tiled;

/// Block size of the plain tiled kernel in the reference suite.
pub const TILE_SIZE: usize = 10;

/// Block size found best for the strided kernel by a manual sweep.
pub const TILE_SIZE_TUNED: usize = 50;
