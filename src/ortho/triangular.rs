//! Inversion of triangular matrices.

use faer::linalg::triangular_inverse;
use faer::{Mat, Par};

use crate::error::RbError;

fn check_square(m: &Mat<f64>) -> Result<usize, RbError> {
    if m.nrows() != m.ncols() {
        return Err(RbError::DimensionMismatch(format!(
            "triangular inverse of a {}x{} matrix",
            m.nrows(),
            m.ncols()
        )));
    }
    Ok(m.nrows())
}

/// Compute U⁻¹ for an upper-triangular `u` (entries below the diagonal are ignored).
///
/// The inverse is upper triangular. A zero on the diagonal is reported as a
/// `NotPositiveDefinite` pivot at that row.
pub fn invert_upper_triangular(u: &Mat<f64>) -> Result<Mat<f64>, RbError> {
    let n = check_square(u)?;
    for i in 0..n {
        if u[(i, i)] == 0.0 {
            return Err(RbError::NotPositiveDefinite { row: i, pivot: 0.0 });
        }
    }
    let mut x = Mat::<f64>::zeros(n, n);
    triangular_inverse::invert_upper_triangular(x.as_mut(), u.as_ref(), Par::Seq);
    Ok(x)
}

/// Compute (Lᵀ)⁻¹ for a lower-triangular `l`.
pub fn invert_lower_transpose(l: &Mat<f64>) -> Result<Mat<f64>, RbError> {
    let n = check_square(l)?;
    let u = Mat::from_fn(n, n, |i, j| if j >= i { l[(j, i)] } else { 0.0 });
    invert_upper_triangular(&u)
}
