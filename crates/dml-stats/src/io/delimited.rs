//! CSV / TSV reader producing an `Array2<f32>` table.
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};

use crate::config::ReaderConfig;
use crate::math::Array2;

/// A numeric table together with its optional header row.
#[derive(Debug, Clone)]
pub struct DelimitedTable {
    pub table: Array2<f32>,
    pub headers: Option<Vec<String>>,
}

impl DelimitedTable {
    /// Display name for column `col`: its header when present, else `col_<n>`.
    pub fn column_name(&self, col: usize) -> String {
        self.headers
            .as_ref()
            .and_then(|h| h.get(col))
            .cloned()
            .unwrap_or_else(|| format!("col_{}", col))
    }
}

/// Read every field of a delimited file as `f32`.
///
/// The delimiter comes from `config`, or from the extension when unset
/// (`.tsv` is tab separated, anything else comma separated).
pub fn read_delimited<P: AsRef<Path>>(path: P, config: &ReaderConfig) -> Result<DelimitedTable> {
    let path = path.as_ref();
    let delimiter = resolve_delimiter(path, config)?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(config.has_headers)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open data file: {}", path.display()))?;

    let headers = if config.has_headers {
        let record = reader
            .headers()
            .context("Failed to read header row")?;
        Some(record.iter().map(str::to_string).collect::<Vec<_>>())
    } else {
        None
    };

    let mut values = Vec::new();
    let mut ncols: Option<usize> = None;
    let mut nrows = 0usize;

    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;
        match ncols {
            None => ncols = Some(record.len()),
            Some(expected) if expected != record.len() => bail!(
                "Row {} has {} fields, expected {}",
                row_idx + 1,
                record.len(),
                expected
            ),
            Some(_) => {}
        }

        for (col_idx, field) in record.iter().enumerate() {
            let parsed = field.parse::<f32>().with_context(|| {
                format!(
                    "Invalid number '{}' at row {}, column {}",
                    field,
                    row_idx + 1,
                    col_idx + 1
                )
            })?;
            values.push(parsed);
        }
        nrows += 1;
    }

    let ncols = ncols.ok_or_else(|| anyhow!("No data rows in {}", path.display()))?;
    if ncols == 0 {
        bail!("Data rows in {} have no fields", path.display());
    }
    if let Some(names) = &headers {
        if names.len() != ncols {
            bail!("Header has {} columns but data rows have {}", names.len(), ncols);
        }
    }

    let table = Array2::from_shape_vec((nrows, ncols), values)
        .context("Failed to build table")?;
    log::debug!(
        "Loaded {}x{} table from {}",
        nrows,
        ncols,
        path.display()
    );

    Ok(DelimitedTable { table, headers })
}

fn resolve_delimiter(path: &Path, config: &ReaderConfig) -> Result<u8> {
    match config.delimiter {
        Some(c) if c.is_ascii() => Ok(c as u8),
        Some(c) => bail!("Delimiter '{}' is not a single ASCII character", c),
        None => {
            let is_tsv = path
                .extension()
                .map(|e| e.eq_ignore_ascii_case("tsv"))
                .unwrap_or(false);
            Ok(if is_tsv { b'\t' } else { b',' })
        }
    }
}
