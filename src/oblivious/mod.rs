//! Cache-oblivious recursive GEMM.
//!
//! The multiply splits every dimension in two and recurses into the eight
//! block products until the pieces are tiny, so locality comes from the
//! recursion itself rather than from a tuned tile size.

pub mod partition;
pub mod recursive;

/// Coarse base-case size of the blocked cache-oblivious kernel.
pub const LEAF_SIZE: usize = 10;
