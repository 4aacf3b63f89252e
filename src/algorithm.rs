//! Every kernel variant behind one enum, so drivers and tests can run the
//! whole family uniformly.

use crate::blocked::tiled::{matmul_tiled, matmul_tiled_strided};
use crate::blocked::{TILE_SIZE, TILE_SIZE_TUNED};
use crate::error::Result;
use crate::matrix::naive_cr::matmul_naive_cr;
use crate::matrix::naive_rc::matmul_naive_rc;
use crate::matrix::view::{MatrixView, MatrixViewMut};
use crate::oblivious::LEAF_SIZE;
use crate::oblivious::recursive::{matmul_cache_oblivious, matmul_cache_oblivious_blocked};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Row-outer triple loop.
    Naive,
    /// Column-outer triple loop.
    NaiveColumnMajor,
    /// Tiled with the indexed micro-kernel and the given block size.
    Tiled(usize),
    /// Tiled with the running-stride micro-kernel and the given block size.
    TiledStrided(usize),
    /// Recursive down to single elements.
    CacheOblivious,
    /// Recursive with a micro-kernel base case of the given size.
    CacheObliviousBlocked(usize),
}

impl Algorithm {
    /// All six variants at their reference tuning, slowest family first.
    pub const fn reference_suite() -> [Algorithm; 6] {
        [
            Algorithm::Naive,
            Algorithm::NaiveColumnMajor,
            Algorithm::Tiled(TILE_SIZE),
            Algorithm::TiledStrided(TILE_SIZE_TUNED),
            Algorithm::CacheOblivious,
            Algorithm::CacheObliviousBlocked(LEAF_SIZE),
        ]
    }

    /// All six variants with every block size set to `block_size`.
    pub const fn with_block_size(block_size: usize) -> [Algorithm; 6] {
        [
            Algorithm::Naive,
            Algorithm::NaiveColumnMajor,
            Algorithm::Tiled(block_size),
            Algorithm::TiledStrided(block_size),
            Algorithm::CacheOblivious,
            Algorithm::CacheObliviousBlocked(block_size),
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Naive => "Naive (row-col)",
            Algorithm::NaiveColumnMajor => "Naive (col-row)",
            Algorithm::Tiled(_) => "Tiled",
            Algorithm::TiledStrided(_) => "Tiled strided",
            Algorithm::CacheOblivious => "Cache-oblivious",
            Algorithm::CacheObliviousBlocked(_) => "Cache-oblivious blk",
        }
    }

    /// Configured block size, if the variant is blocked.
    pub fn block_size(&self) -> Option<usize> {
        match *self {
            Algorithm::Tiled(bs)
            | Algorithm::TiledStrided(bs)
            | Algorithm::CacheObliviousBlocked(bs) => Some(bs),
            Algorithm::Naive | Algorithm::NaiveColumnMajor | Algorithm::CacheOblivious => None,
        }
    }

    /// Computes C = A * B with this variant.
    pub fn multiply(&self, a: &MatrixView, b: &MatrixView, c: &mut MatrixViewMut) -> Result<()> {
        match *self {
            Algorithm::Naive => matmul_naive_rc(a, b, c),
            Algorithm::NaiveColumnMajor => matmul_naive_cr(a, b, c),
            Algorithm::Tiled(bs) => matmul_tiled(a, b, c, bs),
            Algorithm::TiledStrided(bs) => matmul_tiled_strided(a, b, c, bs),
            Algorithm::CacheOblivious => matmul_cache_oblivious(a, b, c),
            Algorithm::CacheObliviousBlocked(bs) => matmul_cache_oblivious_blocked(a, b, c, bs),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.block_size() {
            Some(bs) => write!(f, "{} ({})", self.name(), bs),
            None => f.write_str(self.name()),
        }
    }
}
