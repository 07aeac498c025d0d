use crate::error::DmlError;
use crate::math::Array1;

/// Allocate a zero-filled vector of `len` values owned by the caller.
///
/// Allocation failure is reported as [`DmlError::Allocation`] instead of
/// aborting the process.
pub fn create_float_vector(len: usize) -> Result<Array1<f32>, DmlError> {
    Array1::try_zeros(len).ok_or(DmlError::Allocation { len })
}
