//! Matrix views, shape validation and the naive kernels.
//!
//! Everything here works on unpadded column-major `f32` buffers owned by
//! the caller. The naive kernels double as correctness baselines for the
//! blocked and recursive ones.

pub mod naive_cr;
pub mod naive_rc;
pub mod shape;
pub mod validate;
pub mod view;
