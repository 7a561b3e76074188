//! Inner-product spaces over a finite-element discretization.
//!
//! `HilbertSpace` fixes one `InnerProductKind` at construction and evaluates
//! the matching bilinear form through the discretization's `assemble`.

use std::fmt;
use std::str::FromStr;

use crate::core::function::FullSpaceVector;
use crate::core::traits::{InnerProduct, Integrand};
use crate::error::RbError;

/// Supported inner products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InnerProductKind {
    /// H¹ seminorm: ∫ ∇u · ∇v
    H10,
    /// L²: ∫ u v
    L2,
}

impl InnerProductKind {
    /// Bilinear form evaluated for this kind.
    pub fn integrand(self) -> Integrand {
        match self {
            InnerProductKind::H10 => Integrand::GradDotGrad,
            InnerProductKind::L2 => Integrand::Product,
        }
    }
}

impl fmt::Display for InnerProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InnerProductKind::H10 => write!(f, "H10"),
            InnerProductKind::L2 => write!(f, "L2"),
        }
    }
}

impl FromStr for InnerProductKind {
    type Err = RbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "h10" => Ok(InnerProductKind::H10),
            "l2" => Ok(InnerProductKind::L2),
            _ => Err(RbError::InvalidArgument(format!("unknown inner product kind '{s}'"))),
        }
    }
}

/// A function space equipped with one of the supported inner products.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HilbertSpace {
    kind: InnerProductKind,
    norm_tol: f64,
}

impl HilbertSpace {
    pub fn new(kind: InnerProductKind) -> Self {
        Self { kind, norm_tol: 1e-12 }
    }

    /// Use `tol` as the tolerance on negative norm radicands.
    pub fn with_norm_tol(kind: InnerProductKind, tol: f64) -> Self {
        Self { kind, norm_tol: tol }
    }

    pub fn kind(&self) -> InnerProductKind {
        self.kind
    }

    /// ⟨u, v⟩ for two functions of the same discretization.
    pub fn inner_product(&self, u: &FullSpaceVector, v: &FullSpaceVector) -> Result<f64, RbError> {
        if !u.same_space(v) {
            return Err(RbError::InvalidArgument(
                "inner product of functions from different discretizations".into(),
            ));
        }
        if u.len() != v.len() {
            return Err(RbError::InvalidArgument(format!(
                "inner product of coefficient arrays of length {} and {}",
                u.len(),
                v.len()
            )));
        }
        Ok(u.space().assemble(self.kind.integrand(), u.coefficients(), v.coefficients()))
    }

    /// ‖u‖ = sqrt(⟨u, u⟩).
    pub fn norm(&self, u: &FullSpaceVector) -> Result<f64, RbError> {
        let sq = self.inner_product(u, u)?;
        if sq.is_nan() {
            return Err(RbError::NumericalError("norm radicand is NaN".into()));
        }
        if sq < -self.norm_tol {
            return Err(RbError::NumericalError(format!("negative norm radicand {sq:e}")));
        }
        Ok(sq.max(0.0).sqrt())
    }

    /// u / ‖u‖
    pub fn normalize(&self, u: &FullSpaceVector) -> Result<FullSpaceVector, RbError> {
        u.divide(self.norm(u)?)
    }
}

impl InnerProduct<FullSpaceVector> for HilbertSpace {
    fn dot(&self, x: &FullSpaceVector, y: &FullSpaceVector) -> Result<f64, RbError> {
        self.inner_product(x, y)
    }
    fn norm(&self, x: &FullSpaceVector) -> Result<f64, RbError> {
        HilbertSpace::norm(self, x)
    }
}
