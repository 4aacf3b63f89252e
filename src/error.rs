//! Error types for the multiply kernels and the timer.

use thiserror::Error;

/// Reasons a kernel refuses to run. All of them are raised before C is
/// written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MultiplyError {
    #[error(
        "incompatible shapes: A is {}x{}, B is {}x{}, C is {}x{}",
        a.0, a.1, b.0, b.1, c.0, c.1
    )]
    ShapeMismatch {
        a: (usize, usize),
        b: (usize, usize),
        c: (usize, usize),
    },
    #[error("block size {block_size} is larger than the smallest dimension {smallest}")]
    BlockTooLarge { block_size: usize, smallest: usize },
    #[error("block size must be at least 1")]
    ZeroBlockSize,
    #[error("a {rows}x{cols} matrix has more elements than fit in usize")]
    DimensionOverflow { rows: usize, cols: usize },
    #[error("buffer holds {got} elements, a {rows}x{cols} matrix needs {expected}")]
    BufferSize {
        rows: usize,
        cols: usize,
        expected: usize,
        got: usize,
    },
}

/// Misuse of [`Timer`](crate::timer::Timer).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    #[error("cannot start an already started timer")]
    AlreadyRunning,
    #[error("timer has not been started")]
    NotRunning,
    #[error("start() and stop() must be called at least once before reading stats")]
    NoSamples,
}

pub type Result<T> = std::result::Result<T, MultiplyError>;
