//! Subcommand bodies. The previews print straight to stdout; the other
//! reports go to the supplied writer so tests can pass a buffer.
use std::io::Write;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use dml_stats::display::{head_with, tail_with};
use dml_stats::io::{read_delimited, DelimitedTable};
use dml_stats::math::Array1;
use dml_stats::preprocessing::{column_bounds, scale_to_unity, scale_vector};
use dml_stats::sampling::random_data_stream_with_config;
use dml_stats::stats::describe;

use crate::config::RunConfig;
use crate::util::validate_tsv_or_csv_file;

/// How `scale` should transform the selected column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleMode {
    /// Affine map from the column's own min/max onto `[low, high]`.
    Range { low: f32, high: f32 },
    /// Divide by the column's max - min.
    Unity,
}

/// Validate the path and load the table it points to.
pub fn load_table<P: AsRef<Path>>(path: P, config: &RunConfig) -> Result<DelimitedTable> {
    let path = path.as_ref();
    validate_tsv_or_csv_file(path)?;
    let data = read_delimited(path, &config.reader)?;
    log::info!(
        "[DML] Loaded {} rows x {} columns from {}",
        data.table.nrows(),
        data.table.ncols(),
        path.display()
    );
    Ok(data)
}

/// Print the first `lines` rows to stdout.
pub fn run_head(data: &DelimitedTable, lines: usize, config: &RunConfig) -> Result<()> {
    head_with(&data.table, lines, &config.preview)?;
    Ok(())
}

/// Print the last `lines` rows to stdout, last row first.
pub fn run_tail(data: &DelimitedTable, lines: usize, config: &RunConfig) -> Result<()> {
    tail_with(&data.table, lines, &config.preview)?;
    Ok(())
}

/// Print `count` randomly sampled cell values, one per line.
pub fn run_sample<W: Write>(out: &mut W, data: &DelimitedTable, count: usize, config: &RunConfig) -> Result<()> {
    let stream = random_data_stream_with_config(&data.table, count, &config.sampling)?;
    write_values(out, &stream)
}

/// Print a summary row per column, or for `column` only.
pub fn run_describe<W: Write>(out: &mut W, data: &DelimitedTable, column: Option<usize>) -> Result<()> {
    let columns: Vec<usize> = match column {
        Some(col) => vec![col],
        None => (0..data.table.ncols()).collect(),
    };

    writeln!(out, "column\tmean\tmedian\tstd_dev\tvariance\tmin\tmax")?;
    for col in columns {
        let s = describe(&data.table, col)
            .with_context(|| format!("Failed to describe column {}", col))?;
        writeln!(
            out,
            "{}\t{:.4}\t{:.4}\t{:.4}\t{:.4}\t{:.4}\t{:.4}",
            data.column_name(col),
            s.mean,
            s.median,
            s.std_dev,
            s.variance,
            s.min,
            s.max
        )?;
    }
    Ok(())
}

/// Rescale one column using its own min/max as the source range.
pub fn run_scale<W: Write>(out: &mut W, data: &DelimitedTable, column: usize, mode: ScaleMode) -> Result<()> {
    if column >= data.table.ncols() {
        return Err(anyhow!(
            "Column {} is out of range for a table with {} columns",
            column,
            data.table.ncols()
        ));
    }
    let values = data.table.column(column);
    let (lo, hi) = column_bounds(values.as_slice())
        .ok_or_else(|| anyhow!("Column {} has no values", column))?;
    log::debug!("Column {} spans [{}, {}]", column, lo, hi);

    let scaled = match mode {
        ScaleMode::Range { low, high } => scale_vector(values.as_slice(), lo, hi, low, high),
        ScaleMode::Unity => scale_to_unity(values.as_slice(), lo, hi),
    }
    .with_context(|| format!("Failed to rescale column {}", data.column_name(column)))?;

    write_values(out, &scaled)
}

fn write_values<W: Write>(out: &mut W, values: &Array1<f32>) -> Result<()> {
    for v in values.iter() {
        writeln!(out, "{:.4}", v)?;
    }
    Ok(())
}
