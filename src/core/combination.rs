//! Linear combinations of full-space functions.

use crate::core::function::FullSpaceVector;
use crate::error::RbError;

/// Compute Σ cᵢ · vᵢ.
///
/// Terms with an exactly zero coefficient are skipped. All vectors must share
/// the discretization of `vectors[0]`.
///
/// # Errors
/// * `EmptyInput` if `vectors` is empty
/// * `DimensionMismatch` if the lengths differ or the vectors live in different spaces
pub fn linear_combination<V: AsRef<FullSpaceVector>>(vectors: &[V], coefficients: &[f64]) -> Result<FullSpaceVector, RbError> {
    if vectors.len() != coefficients.len() {
        return Err(RbError::DimensionMismatch(format!(
            "{} vectors but {} coefficients",
            vectors.len(),
            coefficients.len()
        )));
    }
    let first = vectors.first().ok_or(RbError::EmptyInput("linear_combination"))?.as_ref();
    let mut acc = FullSpaceVector::zeros(first.space().clone());
    for (v, &c) in vectors.iter().zip(coefficients) {
        let v = v.as_ref();
        if c == 0.0 {
            // still reject foreign operands
            acc.check_compatible(v)?;
            continue;
        }
        acc.add_scaled_in_place(c, v)?;
    }
    Ok(acc)
}
