//! Small ndarray-like containers backing tables and vectors.
//!
//! `Array2` is the row-major table produced by the loader and `Array1` the
//! owned vector returned by sampling, median scratch space and rescaling.
pub mod matrix;
pub mod vector;

pub use matrix::{Array2, ShapeError};
pub use vector::Array1;
