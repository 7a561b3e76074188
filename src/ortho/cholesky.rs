//! Guarded Cholesky factorization G = L·Lᵀ of a symmetric positive-definite matrix.
//!
//! The factorization itself is faer's `Llt`. On top of it every pivot is
//! checked against a relative threshold so that singular or nearly singular
//! Grammians (duplicate or linearly dependent snapshots) surface as
//! `NotPositiveDefinite` instead of propagating NaNs into the orthonormal basis.

use faer::linalg::solvers::LltError;
use faer::linalg::triangular_solve::solve_lower_triangular_in_place;
use faer::{Mat, Par, Side};

use crate::error::RbError;

/// Lower-triangular Cholesky factor together with its pivot range.
#[derive(Debug, Clone)]
pub struct Cholesky {
    pub(crate) l: Mat<f64>,
    pub(crate) min_pivot: f64,
    pub(crate) max_pivot: f64,
}

impl Cholesky {
    /// Factor `g`, reading only its lower triangle.
    ///
    /// A pivot `d_j = L[j][j]²` is accepted only if `d_j > pivot_tol * |g[j][j]|`.
    pub fn factor(g: &Mat<f64>, pivot_tol: f64) -> Result<Self, RbError> {
        let n = g.nrows();
        if g.ncols() != n {
            return Err(RbError::DimensionMismatch(format!(
                "cholesky of a {}x{} matrix",
                n,
                g.ncols()
            )));
        }
        for j in 0..n {
            for i in j..n {
                if !g[(i, j)].is_finite() {
                    return Err(RbError::NumericalError(format!("non-finite grammian entry ({i}, {j})")));
                }
            }
        }

        let llt = g.as_ref().llt(Side::Lower).map_err(|e| match e {
            LltError::NonPositivePivot { index } => RbError::NotPositiveDefinite {
                row: index,
                pivot: schur_pivot(g, index),
            },
        })?;
        let l = llt.L().to_owned();

        let mut min_pivot = f64::INFINITY;
        let mut max_pivot = 0.0f64;
        for j in 0..n {
            let d = l[(j, j)] * l[(j, j)];
            if d <= pivot_tol * g[(j, j)].abs() {
                return Err(RbError::NotPositiveDefinite { row: j, pivot: d });
            }
            min_pivot = min_pivot.min(d);
            max_pivot = max_pivot.max(d);
        }
        Ok(Self { l, min_pivot, max_pivot })
    }

    /// The lower-triangular factor L.
    pub fn l(&self) -> &Mat<f64> {
        &self.l
    }

    /// Smallest / largest pivot; 1 for an empty factorization.
    pub fn pivot_ratio(&self) -> f64 {
        if self.l.nrows() == 0 {
            1.0
        } else {
            self.min_pivot / self.max_pivot
        }
    }
}

/// Pivot g[j][j] - ‖L₀⁻¹ g[0..j][j]‖² of row `j`, where L₀ factors the leading
/// j×j block. Only used to report a rejected pivot.
fn schur_pivot(g: &Mat<f64>, j: usize) -> f64 {
    if j == 0 {
        return g[(0, 0)];
    }
    let Ok(lead) = g.as_ref().submatrix(0, 0, j, j).llt(Side::Lower) else {
        return f64::NAN;
    };
    let mut y = g.as_ref().submatrix(0, j, j, 1).to_owned();
    solve_lower_triangular_in_place(lead.L(), y.as_mut(), Par::Seq);
    g[(j, j)] - (0..j).map(|k| y[(k, 0)] * y[(k, 0)]).sum::<f64>()
}
