//! Cholesky-based orthonormalization of a set of functions.
//!
//! With G = L·Lᵀ the Grammian of v₀…vₙ₋₁, the Cholesky factor L is the
//! transpose of the R factor of a QR factorization of the set. The columns of
//! (Lᵀ)⁻¹ are therefore the coefficients that turn the vᵢ into an
//! orthonormal basis of their span, without forming Q in the ambient space.
//!
//! A single pass loses orthogonality in proportion to the condition number of
//! G, so by default the pass is repeated once on its own output (CholeskyQR2).
//! The second Grammian is close to the identity and the combined coefficient
//! matrix X₁·X₂ stays upper triangular.
//!
//! # References
//! - Golub & Van Loan, Matrix Computations, §4.2 and §5.2
//! - Fukaya et al., CholeskyQR2: a simple and communication-avoiding algorithm
//!   for computing a tall-skinny QR factorization (2014)

pub mod cholesky;
pub mod triangular;

pub use cholesky::Cholesky;
pub use triangular::{invert_lower_transpose, invert_upper_triangular};

use faer::Mat;

use crate::config::OrthoOptions;
use crate::core::combination::linear_combination;
use crate::core::function::FullSpaceVector;
use crate::error::RbError;
use crate::matrix::grammian::Grammian;
use crate::space::hilbert::HilbertSpace;

/// Orthonormal functions together with their coefficients in the original set.
#[derive(Debug, Clone)]
pub struct OrthonormalBasis {
    vectors: Vec<FullSpaceVector>,
    /// Column i holds the weights of the original vectors in eᵢ.
    coefficients: Mat<f64>,
}

impl OrthonormalBasis {
    pub fn empty() -> Self {
        Self { vectors: Vec::new(), coefficients: Mat::zeros(0, 0) }
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn vectors(&self) -> &[FullSpaceVector] {
        &self.vectors
    }

    pub fn get(&self, i: usize) -> Option<&FullSpaceVector> {
        self.vectors.get(i)
    }

    /// Upper-triangular change-of-basis matrix, (Lᵀ)⁻¹ for a single pass.
    pub fn coefficients(&self) -> &Mat<f64> {
        &self.coefficients
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FullSpaceVector> {
        self.vectors.iter()
    }
}

impl<'a> IntoIterator for &'a OrthonormalBasis {
    type Item = &'a FullSpaceVector;
    type IntoIter = std::slice::Iter<'a, FullSpaceVector>;
    fn into_iter(self) -> Self::IntoIter {
        self.vectors.iter()
    }
}

/// Orthonormalize `vectors` with default options.
///
/// See [`orthonormalize_with`].
pub fn orthonormalize<V>(vectors: &[V], ip: &HilbertSpace, grammian: Option<&Grammian>) -> Result<OrthonormalBasis, RbError>
where
    V: AsRef<FullSpaceVector> + Sync,
{
    orthonormalize_with(vectors, ip, grammian, &OrthoOptions::default())
}

/// Orthonormalize `vectors` under `ip`.
///
/// The Grammian is computed if not supplied. An empty input yields an empty
/// basis. With `opts.reorthogonalize` the result is orthonormalized a second
/// time against its own Grammian.
///
/// # Errors
/// * `DimensionMismatch` if a supplied Grammian does not match `vectors.len()`
/// * `NotPositiveDefinite` if the vectors are (numerically) linearly dependent
/// * `NumericalError` if the Grammian contains non-finite values
pub fn orthonormalize_with<V>(
    vectors: &[V],
    ip: &HilbertSpace,
    grammian: Option<&Grammian>,
    opts: &OrthoOptions,
) -> Result<OrthonormalBasis, RbError>
where
    V: AsRef<FullSpaceVector> + Sync,
{
    let n = vectors.len();
    if n == 0 {
        return Ok(OrthonormalBasis::empty());
    }
    let owned;
    let g = match grammian {
        Some(g) => g,
        None => {
            owned = Grammian::build(vectors, ip)?;
            &owned
        }
    };
    if g.dim() != n {
        return Err(RbError::DimensionMismatch(format!(
            "grammian is {}x{} for {} vectors",
            g.dim(),
            g.dim(),
            n
        )));
    }

    let x1 = coefficient_matrix(g, opts)?;
    let first = combine(vectors, &x1)?;
    if !opts.reorthogonalize {
        return Ok(OrthonormalBasis { vectors: first, coefficients: x1 });
    }

    let g2 = Grammian::build(&first, ip)?;
    let x2 = coefficient_matrix(&g2, opts)?;
    let ortho = combine(&first, &x2)?;
    let coefficients = x1.as_ref() * x2.as_ref();
    Ok(OrthonormalBasis { vectors: ortho, coefficients })
}

/// (Lᵀ)⁻¹ for the Cholesky factor L of `g`.
fn coefficient_matrix(g: &Grammian, opts: &OrthoOptions) -> Result<Mat<f64>, RbError> {
    let n = g.dim();
    let chol = Cholesky::factor(g.as_mat(), opts.pivot_tol)?;
    let ratio = chol.pivot_ratio();
    log::debug!("cholesky of {n}x{n} grammian, pivot ratio {ratio:e}");
    if ratio < opts.conditioning_warn {
        log::warn!("ill-conditioned grammian: smallest/largest pivot = {ratio:e}");
    }
    invert_lower_transpose(chol.l())
}

/// Column i of the result is Σₖ x[k][i]·vₖ.
fn combine<V>(vectors: &[V], x: &Mat<f64>) -> Result<Vec<FullSpaceVector>, RbError>
where
    V: AsRef<FullSpaceVector> + Sync,
{
    let n = x.ncols();
    let column = |i: usize| -> Vec<f64> { (0..x.nrows()).map(|k| x[(k, i)]).collect() };
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        (0..n)
            .into_par_iter()
            .map(|i| linear_combination(vectors, &column(i)))
            .collect()
    }
    #[cfg(not(feature = "rayon"))]
    {
        (0..n).map(|i| linear_combination(vectors, &column(i))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FunctionSpace;
    use crate::space::{DenseSpace, InnerProductKind};
    use approx::assert_abs_diff_eq;
    use std::sync::Arc;

    fn staircase() -> Vec<FullSpaceVector> {
        let s: Arc<dyn FunctionSpace> = Arc::new(DenseSpace::euclidean(3));
        [[1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 1.0, 1.0]]
            .iter()
            .map(|c| FullSpaceVector::from_coefficients(s.clone(), c.to_vec()).unwrap())
            .collect()
    }

    #[test]
    fn staircase_becomes_standard_basis() {
        let ip = HilbertSpace::new(InnerProductKind::L2);
        let onb = orthonormalize(&staircase(), &ip, None).unwrap();
        assert_eq!(onb.len(), 3);
        for (i, e) in onb.iter().enumerate() {
            for (k, &c) in e.coefficients().iter().enumerate() {
                let expected = if i == k { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(c.abs(), expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn supplied_grammian_is_used() {
        let ip = HilbertSpace::new(InnerProductKind::L2);
        let vs = staircase();
        let g = Grammian::build(&vs, &ip).unwrap();
        let a = orthonormalize(&vs, &ip, Some(&g)).unwrap();
        let b = orthonormalize(&vs, &ip, None).unwrap();
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.coefficients(), y.coefficients());
        }
        let short = Grammian::build(&vs[..2], &ip).unwrap();
        assert!(matches!(orthonormalize(&vs, &ip, Some(&short)), Err(RbError::DimensionMismatch(_))));
    }

    #[test]
    fn empty_input_gives_empty_basis() {
        let ip = HilbertSpace::new(InnerProductKind::H10);
        let onb = orthonormalize::<FullSpaceVector>(&[], &ip, None).unwrap();
        assert!(onb.is_empty());
    }

    #[test]
    fn duplicate_snapshots_are_rejected() {
        let ip = HilbertSpace::new(InnerProductKind::L2);
        let mut vs = staircase();
        vs.push(vs[1].clone());
        assert!(matches!(orthonormalize(&vs, &ip, None), Err(RbError::NotPositiveDefinite { row: 3, .. })));
    }

    #[test]
    fn near_dependent_pair_is_orthonormal_after_second_pass() {
        let s: Arc<dyn FunctionSpace> = Arc::new(DenseSpace::euclidean(3));
        let vs: Vec<FullSpaceVector> = [[1.0, 0.3, 0.2], [1.0, 0.3 + 1e-5, 0.2]]
            .iter()
            .map(|c| FullSpaceVector::from_coefficients(s.clone(), c.to_vec()).unwrap())
            .collect();
        let ip = HilbertSpace::new(InnerProductKind::L2);
        let onb = orthonormalize(&vs, &ip, None).unwrap();
        assert!(crate::utils::orthonormality_defect(onb.vectors(), &ip).unwrap() < 1e-12);
        assert_eq!(onb.coefficients()[(1, 0)], 0.0);

        let mut single = OrthoOptions::default();
        single.set_reorthogonalize(false);
        let first = orthonormalize_with(&vs, &ip, None, &single).unwrap();
        assert_eq!(first.len(), 2);
    }
}
