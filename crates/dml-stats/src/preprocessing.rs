//! Elementwise linear rescaling of standalone vectors.
//!
//! Both transforms borrow the input slice and return a freshly allocated
//! vector; the input is left untouched.

use crate::alloc::create_float_vector;
use crate::error::DmlError;
use crate::math::Array1;

/// Divide every element by the width of `[lower_bound, upper_bound]`.
///
/// The lower bound is not subtracted first, so results fall in `[0, 1]` only
/// when the inputs already lie in `[0, upper_bound - lower_bound]`. Use
/// [`scale_vector`] with a `[0, 1]` target for min-max normalization.
pub fn scale_to_unity(
    vector: &[f32],
    lower_bound: f32,
    upper_bound: f32,
) -> Result<Array1<f32>, DmlError> {
    let width = range_width(lower_bound, upper_bound)?;

    let mut unity = create_float_vector(vector.len())?;
    for (out, &x) in unity.iter_mut().zip(vector) {
        *out = x / width;
    }
    Ok(unity)
}

/// Affine map from `[lower_bound, upper_bound]` onto `[new_low_bound, new_up_bound]`.
///
/// `out = x * scale + offset` with
/// `scale = (new_up - new_low) / (upper - lower)` and `offset = new_low - scale * lower`.
pub fn scale_vector(
    vector: &[f32],
    lower_bound: f32,
    upper_bound: f32,
    new_low_bound: f32,
    new_up_bound: f32,
) -> Result<Array1<f32>, DmlError> {
    let width = range_width(lower_bound, upper_bound)?;
    let scale = (new_up_bound - new_low_bound) / width;
    let offset = new_low_bound - scale * lower_bound;
    log::debug!(
        "scale_vector: {} values, scale={}, offset={}",
        vector.len(),
        scale,
        offset
    );

    let mut scaled = create_float_vector(vector.len())?;
    for (out, &x) in scaled.iter_mut().zip(vector) {
        *out = x * scale + offset;
    }
    Ok(scaled)
}

/// Smallest and largest value of `vector`, or `None` when it is empty.
pub fn column_bounds(vector: &[f32]) -> Option<(f32, f32)> {
    let first = *vector.first()?;
    Some(
        vector
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

fn range_width(lower_bound: f32, upper_bound: f32) -> Result<f32, DmlError> {
    let width = upper_bound - lower_bound;
    if width == 0.0 {
        return Err(DmlError::DegenerateRange {
            lower: lower_bound,
            upper: upper_bound,
        });
    }
    Ok(width)
}
