//! Uniform random sampling of table cells.
//!
//! Cells are drawn with replacement: each draw picks a row and a column
//! independently. The default generator is `rand::thread_rng`, which is seeded
//! once per thread from the OS and then reused, so back-to-back calls produce
//! independent streams.
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

use crate::alloc::create_float_vector;
use crate::config::SamplingConfig;
use crate::error::DmlError;
use crate::math::Array1;
use crate::table::{ensure_non_empty, Table};

/// Draw `num_of_data` cell values uniformly at random from `table`.
pub fn random_data_stream<T: Table + ?Sized>(
    table: &T,
    num_of_data: usize,
) -> Result<Array1<f32>, DmlError> {
    random_data_stream_with_rng(table, num_of_data, &mut thread_rng())
}

/// Same as [`random_data_stream`] but draws from the supplied generator.
pub fn random_data_stream_with_rng<T, R>(
    table: &T,
    num_of_data: usize,
    rng: &mut R,
) -> Result<Array1<f32>, DmlError>
where
    T: Table + ?Sized,
    R: Rng,
{
    ensure_non_empty(table)?;
    let (rows, cols) = (table.nrows(), table.ncols());
    if rows == 1 && cols == 1 && num_of_data > 1 {
        log::warn!("Sampling {} values from a single-cell table", num_of_data);
    }

    let mut stream = create_float_vector(num_of_data)?;
    for slot in stream.iter_mut() {
        let row = rng.gen_range(0..rows);
        let col = rng.gen_range(0..cols);
        *slot = table.value(row, col);
    }
    log::debug!("Sampled {} values from a {}x{} table", num_of_data, rows, cols);

    Ok(stream)
}

/// Sample according to `config`: a fixed seed gives a reproducible stream.
pub fn random_data_stream_with_config<T: Table + ?Sized>(
    table: &T,
    num_of_data: usize,
    config: &SamplingConfig,
) -> Result<Array1<f32>, DmlError> {
    match config.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            random_data_stream_with_rng(table, num_of_data, &mut rng)
        }
        None => random_data_stream(table, num_of_data),
    }
}
