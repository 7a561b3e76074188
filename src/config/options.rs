//! Numerical options for orthonormalization and reduced-space construction.
//!
//! This module provides the `OrthoOptions` struct, which collects the
//! tolerances used by the Cholesky factorization of the Grammian, the
//! reorthogonalization switch, the norm guard of the inner-product space and
//! the optional post-build orthonormality check of a reduced space.

/// Tolerances & checks for orthonormalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoOptions {
    /// Relative pivot threshold: pivot `d_j <= pivot_tol * G[j][j]` is rejected.
    pub pivot_tol: f64,

    /// Absolute tolerance on negative norm radicands.
    pub norm_tol: f64,

    /// Smallest/largest pivot ratio below which a conditioning warning is logged.
    pub conditioning_warn: f64,

    /// Repeat the orthonormalization once on its own output (CholeskyQR2).
    pub reorthogonalize: bool,

    /// Max allowed deviation of the onb Gram matrix from identity, if checked.
    pub verify_orthonormality: Option<f64>,
}

impl Default for OrthoOptions {
    fn default() -> Self {
        Self {
            pivot_tol: 1e-12,
            norm_tol: 1e-12,
            conditioning_warn: 1e-8,
            reorthogonalize: true,
            verify_orthonormality: None,
        }
    }
}

impl OrthoOptions {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn set_pivot_tol(&mut self, tol: f64) -> &mut Self { self.pivot_tol = tol; self }
    pub fn pivot_tol(&self) -> f64 { self.pivot_tol }
    pub fn set_norm_tol(&mut self, tol: f64) -> &mut Self { self.norm_tol = tol; self }
    pub fn norm_tol(&self) -> f64 { self.norm_tol }
    pub fn set_conditioning_warn(&mut self, ratio: f64) -> &mut Self { self.conditioning_warn = ratio; self }
    pub fn conditioning_warn(&self) -> f64 { self.conditioning_warn }
    pub fn set_reorthogonalize(&mut self, on: bool) -> &mut Self { self.reorthogonalize = on; self }
    pub fn reorthogonalize(&self) -> bool { self.reorthogonalize }
    pub fn set_verify_orthonormality(&mut self, tol: Option<f64>) -> &mut Self { self.verify_orthonormality = tol; self }
    pub fn verify_orthonormality(&self) -> Option<f64> { self.verify_orthonormality }
}
