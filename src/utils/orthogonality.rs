//! Orthonormality diagnostics for computed bases.

use crate::core::function::FullSpaceVector;
use crate::error::RbError;
use crate::matrix::grammian::Grammian;
use crate::space::hilbert::HilbertSpace;

/// Largest deviation max |⟨eᵢ, eⱼ⟩ - δᵢⱼ| of the Gram matrix of `basis` from identity.
///
/// Zero for an empty basis.
pub fn orthonormality_defect<V>(basis: &[V], ip: &HilbertSpace) -> Result<f64, RbError>
where
    V: AsRef<FullSpaceVector> + Sync,
{
    let g = Grammian::build(basis, ip)?;
    let n = g.dim();
    let mut defect = 0.0f64;
    for i in 0..n {
        for j in i..n {
            let delta = if i == j { 1.0 } else { 0.0 };
            defect = defect.max((g.get(i, j) - delta).abs());
        }
    }
    Ok(defect)
}
