//! Grammian (Gram matrix) of an ordered list of functions.
//!
//! Only the upper triangle (diagonal included) is evaluated, one inner product
//! per pair; the lower triangle is mirrored. With the `rayon` feature the
//! pairs are evaluated in parallel.

use faer::Mat;

use crate::core::function::FullSpaceVector;
use crate::error::RbError;
use crate::space::hilbert::HilbertSpace;

/// Symmetric n×n matrix G[i][j] = ⟨vᵢ, vⱼ⟩.
#[derive(Debug, Clone)]
pub struct Grammian {
    g: Mat<f64>,
}

impl Grammian {
    /// Compute the Grammian of `vectors` under `ip`. Empty input gives a 0×0 matrix.
    pub fn build<V>(vectors: &[V], ip: &HilbertSpace) -> Result<Self, RbError>
    where
        V: AsRef<FullSpaceVector> + Sync,
    {
        let n = vectors.len();
        let pairs: Vec<(usize, usize)> = (0..n).flat_map(|i| (i..n).map(move |j| (i, j))).collect();
        #[cfg(feature = "rayon")]
        let values: Vec<f64> = {
            use rayon::prelude::*;
            pairs
                .par_iter()
                .map(|&(i, j)| ip.inner_product(vectors[i].as_ref(), vectors[j].as_ref()))
                .collect::<Result<Vec<_>, _>>()?
        };
        #[cfg(not(feature = "rayon"))]
        let values: Vec<f64> = pairs
            .iter()
            .map(|&(i, j)| ip.inner_product(vectors[i].as_ref(), vectors[j].as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let mut g = Mat::<f64>::zeros(n, n);
        for (&(i, j), &v) in pairs.iter().zip(&values) {
            g[(i, j)] = v;
            g[(j, i)] = v;
        }
        log::debug!("built {n}x{n} grammian ({} inner products, {})", pairs.len(), ip.kind());
        Ok(Self { g })
    }

    /// Wrap an existing matrix, checking it is square.
    pub fn from_mat(g: Mat<f64>) -> Result<Self, RbError> {
        if g.nrows() != g.ncols() {
            return Err(RbError::DimensionMismatch(format!(
                "grammian must be square, got {}x{}",
                g.nrows(),
                g.ncols()
            )));
        }
        Ok(Self { g })
    }

    pub fn dim(&self) -> usize {
        self.g.nrows()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.g[(i, j)]
    }

    pub fn as_mat(&self) -> &Mat<f64> {
        &self.g
    }

    pub fn into_mat(self) -> Mat<f64> {
        self.g
    }

    /// True if |G[i][j] - G[j][i]| <= tol for all i, j.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        let n = self.dim();
        (0..n).all(|i| (i + 1..n).all(|j| (self.g[(i, j)] - self.g[(j, i)]).abs() <= tol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FunctionSpace;
    use crate::space::{DenseSpace, InnerProductKind};
    use std::sync::Arc;

    #[test]
    fn staircase_grammian() {
        let s: Arc<dyn FunctionSpace> = Arc::new(DenseSpace::euclidean(3));
        let vs: Vec<FullSpaceVector> = [[1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 1.0, 1.0]]
            .iter()
            .map(|c| FullSpaceVector::from_coefficients(s.clone(), c.to_vec()).unwrap())
            .collect();
        let g = Grammian::build(&vs, &HilbertSpace::new(InnerProductKind::L2)).unwrap();
        let expected = [[1.0, 1.0, 1.0], [1.0, 2.0, 2.0], [1.0, 2.0, 3.0]];
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(g.get(i, j), expected[i][j]);
            }
        }
        assert!(g.is_symmetric(0.0));
    }

    #[test]
    fn empty_input_gives_empty_matrix() {
        let g = Grammian::build::<FullSpaceVector>(&[], &HilbertSpace::new(InnerProductKind::H10)).unwrap();
        assert_eq!(g.dim(), 0);
    }

    #[test]
    fn from_mat_requires_square() {
        assert!(matches!(
            Grammian::from_mat(Mat::zeros(2, 3)),
            Err(RbError::DimensionMismatch(_))
        ));
    }
}
