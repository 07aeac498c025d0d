//! Text previews of the first and last rows of a table.
//!
//! `head` prints rows top-down with three decimals and tab separators,
//! `tail` prints rows bottom-up with two decimals and space separators. The
//! precisions come from [`PreviewConfig`] and only the defaults are fixed.

use std::io::{self, Write};

use crate::config::PreviewConfig;
use crate::error::DmlError;
use crate::table::{ensure_non_empty, Table};

const HEAD_FOOTER: &str = "*** ============================================= ***";
const TAIL_FOOTER: &str = "*** ========================================== ***";

/// Print the top `lines` rows of `table` to stdout.
pub fn head<T: Table + ?Sized>(table: &T, lines: usize) -> Result<(), DmlError> {
    head_with(table, lines, &PreviewConfig::default())
}

/// Print the bottom `lines` rows of `table` to stdout, last row first.
pub fn tail<T: Table + ?Sized>(table: &T, lines: usize) -> Result<(), DmlError> {
    tail_with(table, lines, &PreviewConfig::default())
}

/// [`head`] with explicit formatting.
pub fn head_with<T: Table + ?Sized>(
    table: &T,
    lines: usize,
    config: &PreviewConfig,
) -> Result<(), DmlError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    head_to(&mut handle, table, lines, config)?;
    handle.flush()?;
    Ok(())
}

/// [`tail`] with explicit formatting.
pub fn tail_with<T: Table + ?Sized>(
    table: &T,
    lines: usize,
    config: &PreviewConfig,
) -> Result<(), DmlError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    tail_to(&mut handle, table, lines, config)?;
    handle.flush()?;
    Ok(())
}

/// Write the top `lines` rows of `table` to `out`.
///
/// # Errors
///
/// `InvalidArgument` when `lines` is zero or exceeds the row count. Nothing is
/// written in that case.
pub fn head_to<W, T>(
    out: &mut W,
    table: &T,
    lines: usize,
    config: &PreviewConfig,
) -> Result<(), DmlError>
where
    W: Write + ?Sized,
    T: Table + ?Sized,
{
    check_lines(table, lines)?;
    log::debug!("head: {} of {} rows", lines, table.nrows());

    writeln!(out, "*** ================ TOP {} ROWS ================ ***", lines)?;
    for row in 0..lines {
        for col in 0..table.ncols() {
            write!(
                out,
                "{:>width$.prec$}\t",
                table.value(row, col),
                width = config.width,
                prec = config.head_precision
            )?;
        }
        writeln!(out, " ")?;
    }
    writeln!(out, "{}", HEAD_FOOTER)?;
    Ok(())
}

/// Write the bottom `lines` rows of `table` to `out`, from the last row upward.
///
/// # Errors
///
/// Same conditions as [`head_to`].
pub fn tail_to<W, T>(
    out: &mut W,
    table: &T,
    lines: usize,
    config: &PreviewConfig,
) -> Result<(), DmlError>
where
    W: Write + ?Sized,
    T: Table + ?Sized,
{
    check_lines(table, lines)?;
    log::debug!("tail: {} of {} rows", lines, table.nrows());

    let rows = table.nrows();
    writeln!(out, "*** ================ BOTTOM {} ROWS ================ ***", lines)?;
    for row in (rows - lines..rows).rev() {
        for col in 0..table.ncols() {
            write!(
                out,
                "{:>width$.prec$} ",
                table.value(row, col),
                width = config.width,
                prec = config.tail_precision
            )?;
        }
        writeln!(out, " ")?;
    }
    writeln!(out, "{}", TAIL_FOOTER)?;
    Ok(())
}

fn check_lines<T: Table + ?Sized>(table: &T, lines: usize) -> Result<(), DmlError> {
    ensure_non_empty(table)?;
    if lines == 0 {
        return Err(DmlError::InvalidArgument(
            "number of preview lines must be positive".to_string(),
        ));
    }
    if lines > table.nrows() {
        return Err(DmlError::InvalidArgument(format!(
            "requested {} lines but the table has {} rows",
            lines,
            table.nrows()
        )));
    }
    Ok(())
}
