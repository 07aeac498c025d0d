//! Loading tables from delimited text.
pub mod delimited;

pub use delimited::{read_delimited, DelimitedTable};
