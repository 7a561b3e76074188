//! Diagnostics shared by the orthonormalization pipeline.

pub mod orthogonality;
pub use orthogonality::orthonormality_defect;
