//! dml-stats: descriptive statistics and rescaling over tabular f32 data.
//!
//! The crate works on any rectangular table exposed through [`table::Table`]
//! (the bundled [`math::Array2`] implements it). It offers head/tail previews,
//! random cell sampling, per-column mean/median/variance/standard deviation,
//! and two linear rescaling transforms for standalone vectors.
//!
//! Every operation validates its arguments and reports failures through
//! [`error::DmlError`]; returned vectors are owned by the caller.
pub mod alloc;
pub mod config;
pub mod display;
pub mod error;
pub mod io;
pub mod math;
pub mod preprocessing;
pub mod sampling;
pub mod stats;
pub mod table;

pub use alloc::create_float_vector;
pub use display::{head, tail};
pub use error::DmlError;
pub use preprocessing::{scale_to_unity, scale_vector};
pub use sampling::random_data_stream;
pub use stats::{compare_vectors, mean, median, standard_deviation, variance};
pub use table::Table;
