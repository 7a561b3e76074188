//! rbspace: reduced-basis approximation spaces over Faer
//!
//! This crate builds reduced-order approximation spaces for parametrized PDEs
//! from precomputed full-order snapshots: it assembles the Grammian of the
//! snapshots under an H¹₀ or L² inner product, orthonormalizes them through a
//! guarded Cholesky factorization and projects full-space functions onto the
//! resulting basis.

pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod matrix;
pub mod ortho;
pub mod space;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use context::*;
pub use crate::core::*;
pub use error::*;
pub use matrix::*;
pub use ortho::{OrthonormalBasis, orthonormalize, orthonormalize_with};
pub use space::*;
pub use utils::*;
