//! Column reductions: mean, median, variance and standard deviation.
//!
//! All reductions accumulate in `f32` and treat the column as the whole
//! population (denominator `rows`, no Bessel correction).
use std::cmp::Ordering;

use serde::Serialize;

use crate::alloc::create_float_vector;
use crate::error::DmlError;
use crate::math::Array1;
use crate::preprocessing::column_bounds;
use crate::table::{check_column, Table};

/// Arithmetic mean of column `col`.
///
/// # Errors
///
/// `EmptyTable` when the table has no rows, `ColumnOutOfRange` when
/// `col >= ncols`.
pub fn mean<T: Table + ?Sized>(table: &T, col: usize) -> Result<f32, DmlError> {
    check_column(table, col)?;
    let sum: f32 = (0..table.nrows()).map(|row| table.value(row, col)).sum();
    Ok(sum / table.nrows() as f32)
}

/// Ascending order for two values. Values that cannot be ordered (NaN)
/// compare equal, and `0.0` equals `-0.0`.
pub fn compare_vectors(a: &f32, b: &f32) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Median of column `col`.
///
/// The column is copied and sorted; the middle value (odd row count) or the
/// average of the two middle values (even row count) is read from the sorted
/// copy.
pub fn median<T: Table + ?Sized>(table: &T, col: usize) -> Result<f32, DmlError> {
    check_column(table, col)?;
    let sorted = sorted_column(table, col)?;
    Ok(middle_of(&sorted))
}

/// Population variance of column `col`: mean squared distance from the mean.
pub fn variance<T: Table + ?Sized>(table: &T, col: usize) -> Result<f32, DmlError> {
    let mean_val = mean(table, col)?;
    Ok(variance_about(table, col, mean_val))
}

/// Population standard deviation of column `col`, the square root of [`variance`].
pub fn standard_deviation<T: Table + ?Sized>(table: &T, col: usize) -> Result<f32, DmlError> {
    variance(table, col).map(f32::sqrt)
}

/// Per-column summary used by the `describe` command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub mean: f32,
    pub median: f32,
    pub variance: f32,
    pub std_dev: f32,
    pub min: f32,
    pub max: f32,
}

/// Compute every statistic for column `col` in one call.
pub fn describe<T: Table + ?Sized>(table: &T, col: usize) -> Result<ColumnSummary, DmlError> {
    let mean_val = mean(table, col)?;
    let var = variance_about(table, col, mean_val);
    let sorted = sorted_column(table, col)?;
    let (min, max) = column_bounds(sorted.as_slice()).ok_or(DmlError::EmptyTable)?;

    Ok(ColumnSummary {
        mean: mean_val,
        median: middle_of(&sorted),
        variance: var,
        std_dev: var.sqrt(),
        min,
        max,
    })
}

fn variance_about<T: Table + ?Sized>(table: &T, col: usize, mean_val: f32) -> f32 {
    let sum: f32 = (0..table.nrows())
        .map(|row| {
            let distance = table.value(row, col) - mean_val;
            distance * distance
        })
        .sum();
    sum / table.nrows() as f32
}

/// Ascending copy of column `col`. The column must already be validated.
fn sorted_column<T: Table + ?Sized>(table: &T, col: usize) -> Result<Array1<f32>, DmlError> {
    let mut sorted = create_float_vector(table.nrows())?;
    for (row, slot) in sorted.iter_mut().enumerate() {
        *slot = table.value(row, col);
    }
    sorted.as_mut_slice().sort_unstable_by(compare_vectors);
    Ok(sorted)
}

// non-empty sorted input
fn middle_of(sorted: &Array1<f32>) -> f32 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}
