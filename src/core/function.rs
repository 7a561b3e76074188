//! Functions of a fixed discretization and their elementwise algebra.
//!
//! A `FullSpaceVector` couples a degree-of-freedom coefficient array with the
//! `FunctionSpace` it belongs to. Two vectors can only be combined when they
//! share the same space instance.
//!
//! Arithmetic comes in two flavours:
//! - pure operations (`add`, `sub`, `scale`, `divide`) allocate a new vector;
//! - in-place operations (`add_in_place`, `sub_in_place`, `scale_in_place`,
//!   `divide_in_place`, `add_scaled_in_place`) mutate the receiver and return it,
//!   which is what accumulators use during linear combinations.

use std::fmt;
use std::sync::Arc;

use crate::core::traits::FunctionSpace;
use crate::error::RbError;

#[derive(Clone)]
pub struct FullSpaceVector {
    space: Arc<dyn FunctionSpace>,
    coeffs: Vec<f64>,
}

impl FullSpaceVector {
    /// The zero function of `space`.
    pub fn zeros(space: Arc<dyn FunctionSpace>) -> Self {
        let n = space.ndofs();
        Self { space, coeffs: vec![0.0; n] }
    }

    /// Build a function of `space` from its coefficient array.
    pub fn from_coefficients(space: Arc<dyn FunctionSpace>, coeffs: Vec<f64>) -> Result<Self, RbError> {
        if coeffs.len() != space.ndofs() {
            return Err(RbError::DimensionMismatch(format!(
                "space has {} dofs, got {} coefficients",
                space.ndofs(),
                coeffs.len()
            )));
        }
        Ok(Self { space, coeffs })
    }

    pub fn space(&self) -> &Arc<dyn FunctionSpace> {
        &self.space
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Overwrite the coefficient array.
    pub fn set_coefficients(&mut self, coeffs: &[f64]) -> Result<(), RbError> {
        if coeffs.len() != self.coeffs.len() {
            return Err(RbError::DimensionMismatch(format!(
                "expected {} coefficients, got {}",
                self.coeffs.len(),
                coeffs.len()
            )));
        }
        self.coeffs.copy_from_slice(coeffs);
        Ok(())
    }

    pub fn into_coefficients(self) -> Vec<f64> {
        self.coeffs
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// True if both vectors live in the same space instance.
    pub fn same_space(&self, other: &FullSpaceVector) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.space), Arc::as_ptr(&other.space))
    }

    pub(crate) fn check_compatible(&self, other: &FullSpaceVector) -> Result<(), RbError> {
        if !self.same_space(other) {
            return Err(RbError::DimensionMismatch(
                "functions belong to different discretizations".into(),
            ));
        }
        if self.coeffs.len() != other.coeffs.len() {
            return Err(RbError::DimensionMismatch(format!(
                "coefficient arrays of length {} and {}",
                self.coeffs.len(),
                other.coeffs.len()
            )));
        }
        Ok(())
    }

    /// Returns `self + other`.
    pub fn add(&self, other: &FullSpaceVector) -> Result<FullSpaceVector, RbError> {
        let mut out = self.clone();
        out.add_in_place(other)?;
        Ok(out)
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &FullSpaceVector) -> Result<FullSpaceVector, RbError> {
        let mut out = self.clone();
        out.sub_in_place(other)?;
        Ok(out)
    }

    /// Returns `c * self`.
    pub fn scale(&self, c: f64) -> FullSpaceVector {
        let mut out = self.clone();
        out.scale_in_place(c);
        out
    }

    /// Returns `self / c`.
    pub fn divide(&self, c: f64) -> Result<FullSpaceVector, RbError> {
        let mut out = self.clone();
        out.divide_in_place(c)?;
        Ok(out)
    }

    pub fn add_in_place(&mut self, other: &FullSpaceVector) -> Result<&mut Self, RbError> {
        self.check_compatible(other)?;
        for (a, b) in self.coeffs.iter_mut().zip(&other.coeffs) {
            *a += *b;
        }
        Ok(self)
    }

    pub fn sub_in_place(&mut self, other: &FullSpaceVector) -> Result<&mut Self, RbError> {
        self.check_compatible(other)?;
        for (a, b) in self.coeffs.iter_mut().zip(&other.coeffs) {
            *a -= *b;
        }
        Ok(self)
    }

    pub fn scale_in_place(&mut self, c: f64) -> &mut Self {
        self.coeffs.iter_mut().for_each(|a| *a *= c);
        self
    }

    pub fn divide_in_place(&mut self, c: f64) -> Result<&mut Self, RbError> {
        if c == 0.0 {
            return Err(RbError::DivisionByZero);
        }
        self.coeffs.iter_mut().for_each(|a| *a /= c);
        Ok(self)
    }

    /// self ← self + c · other
    pub fn add_scaled_in_place(&mut self, c: f64, other: &FullSpaceVector) -> Result<&mut Self, RbError> {
        self.check_compatible(other)?;
        for (a, b) in self.coeffs.iter_mut().zip(&other.coeffs) {
            *a += c * *b;
        }
        Ok(self)
    }
}

impl AsRef<FullSpaceVector> for FullSpaceVector {
    fn as_ref(&self) -> &FullSpaceVector {
        self
    }
}

impl fmt::Debug for FullSpaceVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FullSpaceVector")
            .field("ndofs", &self.coeffs.len())
            .field("coeffs", &self.coeffs)
            .finish()
    }
}
