//! Dense reference discretization on top of Faer.
//!
//! `DenseSpace` stores the two assembled bilinear forms of a discretization as
//! dense `faer::Mat<f64>` matrices:
//! - the mass matrix `M`, with `∫ u v = uᵀ M v`;
//! - the stiffness matrix `K`, with `∫ ∇u · ∇v = uᵀ K v`.
//!
//! It stands in for a finite-element backend when the forms are small enough
//! to be held densely, and provides a piecewise-linear (P1) discretization of
//! the unit interval with homogeneous Dirichlet nodes removed.

use faer::Mat;

use crate::core::traits::{FunctionSpace, Integrand};
use crate::error::RbError;

#[derive(Debug, Clone)]
pub struct DenseSpace {
    mass: Mat<f64>,
    stiffness: Mat<f64>,
}

impl DenseSpace {
    /// Build from assembled mass and stiffness matrices.
    pub fn new(mass: Mat<f64>, stiffness: Mat<f64>) -> Result<Self, RbError> {
        let n = mass.nrows();
        if mass.ncols() != n || stiffness.nrows() != n || stiffness.ncols() != n {
            return Err(RbError::DimensionMismatch(format!(
                "mass is {}x{}, stiffness is {}x{}",
                mass.nrows(),
                mass.ncols(),
                stiffness.nrows(),
                stiffness.ncols()
            )));
        }
        Ok(Self { mass, stiffness })
    }

    /// `n` dofs with identity mass and stiffness: both inner products are the Euclidean dot product.
    pub fn euclidean(n: usize) -> Self {
        Self {
            mass: Mat::identity(n, n),
            stiffness: Mat::identity(n, n),
        }
    }

    /// P1 elements on a uniform mesh of [0, 1] with `cells` cells.
    ///
    /// Boundary nodes carry homogeneous Dirichlet conditions and are dropped,
    /// leaving `cells - 1` interior dofs.
    pub fn p1_unit_interval(cells: usize) -> Result<Self, RbError> {
        if cells < 2 {
            return Err(RbError::InvalidArgument(format!(
                "P1 interval needs at least 2 cells, got {cells}"
            )));
        }
        let n = cells - 1;
        let h = 1.0 / cells as f64;
        let mass = Mat::from_fn(n, n, |i, j| match i.abs_diff(j) {
            0 => 4.0 * h / 6.0,
            1 => h / 6.0,
            _ => 0.0,
        });
        let stiffness = Mat::from_fn(n, n, |i, j| match i.abs_diff(j) {
            0 => 2.0 / h,
            1 => -1.0 / h,
            _ => 0.0,
        });
        Ok(Self { mass, stiffness })
    }

    pub fn mass(&self) -> &Mat<f64> {
        &self.mass
    }

    pub fn stiffness(&self) -> &Mat<f64> {
        &self.stiffness
    }

    fn form(&self, integrand: Integrand) -> &Mat<f64> {
        match integrand {
            Integrand::GradDotGrad => &self.stiffness,
            Integrand::Product => &self.mass,
        }
    }
}

impl FunctionSpace for DenseSpace {
    fn ndofs(&self) -> usize {
        self.mass.nrows()
    }

    /// uᵀ A v for the matrix A of `integrand`.
    fn assemble(&self, integrand: Integrand, u: &[f64], v: &[f64]) -> f64 {
        let a = self.form(integrand);
        let n = a.nrows();
        debug_assert_eq!(u.len(), n, "u has incorrect length");
        debug_assert_eq!(v.len(), n, "v has incorrect length");
        let mut acc = 0.0;
        for j in 0..n {
            if v[j] == 0.0 {
                continue;
            }
            let mut col = 0.0;
            for i in 0..n {
                col += u[i] * a[(i, j)];
            }
            acc += col * v[j];
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn euclidean_is_dot_product() {
        let s = DenseSpace::euclidean(3);
        let x = [1.0, 2.0, 3.0];
        let y = [4.0, -5.0, 6.0];
        assert_abs_diff_eq!(s.assemble(Integrand::Product, &x, &y), 12.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.assemble(Integrand::GradDotGrad, &x, &y), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn p1_mass_integrates_constants() {
        // the all-ones interior vector is 1 on [h, 1-h] with linear ramps to 0
        let cells = 10;
        let s = DenseSpace::p1_unit_interval(cells).unwrap();
        let ones = vec![1.0; s.ndofs()];
        let h = 1.0 / cells as f64;
        // ∫ u² = (1 - 2h) + 2 · h/3
        let expected = (1.0 - 2.0 * h) + 2.0 * h / 3.0;
        assert_abs_diff_eq!(s.assemble(Integrand::Product, &ones, &ones), expected, epsilon = 1e-12);
        // ∫ u'² = 2 · (1/h)² · h
        assert_abs_diff_eq!(s.assemble(Integrand::GradDotGrad, &ones, &ones), 2.0 / h, epsilon = 1e-9);
    }

    #[test]
    fn rejects_bad_shapes() {
        assert!(matches!(
            DenseSpace::new(Mat::identity(2, 2), Mat::identity(3, 3)),
            Err(RbError::DimensionMismatch(_))
        ));
        assert!(matches!(DenseSpace::p1_unit_interval(1), Err(RbError::InvalidArgument(_))));
    }
}
