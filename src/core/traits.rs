//! Core traits for rbspace.

use crate::error::RbError;

/// Bilinear forms a discretization must be able to assemble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Integrand {
    /// ∫ ∇u · ∇v dx
    GradDotGrad,
    /// ∫ u v dx
    Product,
}

/// A finite-element discretization ("function space") provided by an external backend.
///
/// Functions living in the space are represented by their degree-of-freedom
/// coefficient arrays of length `ndofs()`.
pub trait FunctionSpace: Send + Sync + std::fmt::Debug {
    /// Number of degrees of freedom.
    fn ndofs(&self) -> usize;
    /// Assemble `integrand` over the domain for the two coefficient arrays.
    fn assemble(&self, integrand: Integrand, u: &[f64], v: &[f64]) -> f64;
}

/// Inner products & norms.
pub trait InnerProduct<V> {
    /// Compute ⟨x, y⟩.
    fn dot(&self, x: &V, y: &V) -> Result<f64, RbError>;
    /// Compute ‖x‖ = sqrt(⟨x, x⟩).
    fn norm(&self, x: &V) -> Result<f64, RbError>;
}
