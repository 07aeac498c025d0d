//! Read-only view over rectangular f32 data.
//!
//! Every operation in this crate borrows its input through [`Table`], so any
//! loader can hand over its own storage as long as it reports the shape and
//! answers indexed reads.

use crate::error::DmlError;
use crate::math::Array2;

pub trait Table {
    fn nrows(&self) -> usize;

    fn ncols(&self) -> usize;

    /// Value at `(row, col)`. Callers stay within `nrows() x ncols()`.
    fn value(&self, row: usize, col: usize) -> f32;
}

impl Table for Array2<f32> {
    fn nrows(&self) -> usize {
        Array2::nrows(self)
    }

    fn ncols(&self) -> usize {
        Array2::ncols(self)
    }

    fn value(&self, row: usize, col: usize) -> f32 {
        self[(row, col)]
    }
}

/// Reject tables with no cells.
pub(crate) fn ensure_non_empty<T: Table + ?Sized>(table: &T) -> Result<(), DmlError> {
    if table.nrows() == 0 || table.ncols() == 0 {
        return Err(DmlError::EmptyTable);
    }
    Ok(())
}

/// Reject empty tables and column indices past the last column.
pub(crate) fn check_column<T: Table + ?Sized>(table: &T, col: usize) -> Result<(), DmlError> {
    ensure_non_empty(table)?;
    if col >= table.ncols() {
        return Err(DmlError::ColumnOutOfRange {
            col,
            cols: table.ncols(),
        });
    }
    Ok(())
}
