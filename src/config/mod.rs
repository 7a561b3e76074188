//! Configuration for Grammian factorization and reduced-space construction.

pub mod options;
pub use options::OrthoOptions;
