//! Reduced space built from a basis-construction strategy.
//!
//! This module provides the `ReducedSpace` struct, which owns the snapshot
//! basis, its Grammian and the orthonormal basis derived from it, and exposes
//! the Galerkin projection of full-space functions onto span(onb).
//!
//! # Usage
//!
//! 1. Implement (or pick) a `BasisStrategy` producing the snapshot list.
//! 2. Build the space with `ReducedSpace::new` or `ReducedSpace::with_options`.
//! 3. Call `project` on full-order functions of the same discretization.
//!
//! Construction is atomic: any failure (empty basis, dependent snapshots,
//! mismatched discretizations) returns an error and no instance.

use crate::config::OrthoOptions;
use crate::context::strategy::BasisStrategy;
use crate::core::combination::linear_combination;
use crate::core::function::FullSpaceVector;
use crate::core::snapshot::ParametrizedSnapshot;
use crate::error::RbError;
use crate::matrix::grammian::Grammian;
use crate::ortho::{OrthonormalBasis, orthonormalize_with};
use crate::space::hilbert::{HilbertSpace, InnerProductKind};
use crate::utils::orthogonality::orthonormality_defect;

#[derive(Debug, Clone)]
pub struct ReducedSpace {
    hilbert: HilbertSpace,
    basis: Vec<ParametrizedSnapshot>,
    dim: usize,
    grammian: Grammian,
    onb: OrthonormalBasis,
}

impl ReducedSpace {
    /// Build with default `OrthoOptions`.
    pub fn new<S: BasisStrategy + ?Sized>(strategy: &S) -> Result<Self, RbError> {
        Self::with_options(strategy, &OrthoOptions::default())
    }

    pub fn with_options<S: BasisStrategy + ?Sized>(strategy: &S, opts: &OrthoOptions) -> Result<Self, RbError> {
        let (kind, basis) = strategy.generate_basis();
        if basis.is_empty() {
            return Err(RbError::EmptyBasis);
        }
        let hilbert = HilbertSpace::with_norm_tol(kind, opts.norm_tol);
        let dim = basis.len();
        let grammian = Grammian::build(&basis, &hilbert)?;
        let onb = orthonormalize_with(&basis, &hilbert, Some(&grammian), opts)?;

        if let Some(tol) = opts.verify_orthonormality {
            let defect = orthonormality_defect(onb.vectors(), &hilbert)?;
            if defect > tol {
                return Err(RbError::NumericalError(format!(
                    "orthonormal basis deviates from identity by {defect:e} (tolerance {tol:e})"
                )));
            }
        }
        log::info!("built {kind} reduced space of dimension {dim}");
        Ok(Self { hilbert, basis, dim, grammian, onb })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn kind(&self) -> InnerProductKind {
        self.hilbert.kind()
    }

    pub fn hilbert(&self) -> &HilbertSpace {
        &self.hilbert
    }

    /// The raw snapshots, in strategy order.
    pub fn basis(&self) -> &[ParametrizedSnapshot] {
        &self.basis
    }

    pub fn grammian(&self) -> &Grammian {
        &self.grammian
    }

    pub fn onb(&self) -> &OrthonormalBasis {
        &self.onb
    }

    fn check_member(&self, u: &FullSpaceVector) -> Result<(), RbError> {
        let e0 = self.onb.get(0).ok_or(RbError::EmptyBasis)?;
        if !u.same_space(e0) || u.len() != e0.len() {
            return Err(RbError::DimensionMismatch(
                "function does not belong to the reduced space's discretization".into(),
            ));
        }
        Ok(())
    }

    /// Coefficients cᵢ = ⟨u, eᵢ⟩ of `u` in the orthonormal basis.
    pub fn coefficients(&self, u: &FullSpaceVector) -> Result<Vec<f64>, RbError> {
        self.check_member(u)?;
        self.onb
            .iter()
            .map(|e| self.hilbert.inner_product(u, e))
            .collect()
    }

    /// Σ cᵢ eᵢ for coefficients in the orthonormal basis.
    pub fn reconstruct(&self, coefficients: &[f64]) -> Result<FullSpaceVector, RbError> {
        if self.onb.is_empty() {
            return Err(RbError::EmptyBasis);
        }
        linear_combination(self.onb.vectors(), coefficients)
    }

    /// Orthogonal (Galerkin) projection of `u` onto span(onb).
    pub fn project(&self, u: &FullSpaceVector) -> Result<FullSpaceVector, RbError> {
        let c = self.coefficients(u)?;
        self.reconstruct(&c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::strategy::FixedBasis;
    use crate::core::traits::FunctionSpace;
    use crate::space::DenseSpace;
    use approx::assert_abs_diff_eq;
    use std::sync::Arc;

    fn staircase(s: &Arc<dyn FunctionSpace>) -> Vec<ParametrizedSnapshot> {
        [[1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 1.0, 1.0]]
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let f = FullSpaceVector::from_coefficients(s.clone(), c.to_vec()).unwrap();
                ParametrizedSnapshot::snapshot(f, vec![i as f64])
            })
            .collect()
    }

    #[test]
    fn full_rank_projection_is_identity() {
        let s: Arc<dyn FunctionSpace> = Arc::new(DenseSpace::euclidean(3));
        let rs = ReducedSpace::new(&FixedBasis::new(InnerProductKind::L2, staircase(&s))).unwrap();
        assert_eq!(rs.dim(), 3);
        assert_eq!(rs.kind(), InnerProductKind::L2);
        let u = FullSpaceVector::from_coefficients(s, vec![2.0, 3.0, 5.0]).unwrap();
        let p = rs.project(&u).unwrap();
        for (a, b) in p.coefficients().iter().zip(u.coefficients()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
        }
    }

    #[test]
    fn empty_strategy_is_rejected() {
        let strategy = FixedBasis::new(InnerProductKind::H10, Vec::new());
        assert_eq!(ReducedSpace::new(&strategy).unwrap_err(), RbError::EmptyBasis);
    }

    #[test]
    fn foreign_function_is_rejected() {
        let s: Arc<dyn FunctionSpace> = Arc::new(DenseSpace::euclidean(3));
        let rs = ReducedSpace::new(&FixedBasis::new(InnerProductKind::L2, staircase(&s))).unwrap();
        let other = FullSpaceVector::zeros(Arc::new(DenseSpace::euclidean(3)));
        assert!(matches!(rs.project(&other), Err(RbError::DimensionMismatch(_))));
    }

    #[test]
    fn reconstruct_checks_length() {
        let s: Arc<dyn FunctionSpace> = Arc::new(DenseSpace::euclidean(3));
        let rs = ReducedSpace::new(&FixedBasis::new(InnerProductKind::L2, staircase(&s))).unwrap();
        assert!(matches!(rs.reconstruct(&[1.0]), Err(RbError::DimensionMismatch(_))));
    }
}
