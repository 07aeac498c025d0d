use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use dml_stats::math::Array2;
use dml_stats::preprocessing::{column_bounds, scale_vector};
use dml_stats::sampling::random_data_stream_with_rng;
use dml_stats::stats::describe;
use dml_stats::{head, tail};

fn main() -> Result<()> {
    env_logger::init();

    // 20 rows x 3 columns of synthetic measurements
    let mut rng = StdRng::seed_from_u64(1);
    let rows: Vec<Vec<f32>> = (0..20)
        .map(|_| (0..3).map(|_| rng.gen_range(-5.0..25.0)).collect())
        .collect();
    let table = Array2::from_rows(rows)?;

    head(&table, 5)?;
    tail(&table, 5)?;

    for col in 0..table.ncols() {
        let s = describe(&table, col)?;
        println!(
            "col {}: mean={:.3} median={:.3} std={:.3} min={:.3} max={:.3}",
            col, s.mean, s.median, s.std_dev, s.min, s.max
        );
    }

    let stream = random_data_stream_with_rng(&table, 8, &mut rng)?;
    println!("sampled: {:.2}", stream);

    if let Some((lo, hi)) = column_bounds(stream.as_slice()) {
        let scaled = scale_vector(stream.as_slice(), lo, hi, 0.0, 1.0)?;
        println!("scaled:  {:.2}", scaled);
    }

    Ok(())
}
