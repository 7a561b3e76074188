//! Context module: reduced spaces and the strategies that feed them.
//!
//! Modules:
//! - [`strategy`]: the `BasisStrategy` trait and a fixed-list strategy.
//! - [`reduced_space`]: the `ReducedSpace` struct holding the snapshot basis,
//!   its Grammian and orthonormal basis, and the projection operator.
//!
//! # Example
//! ```rust,ignore
//! use rbspace::{FixedBasis, InnerProductKind, ReducedSpace};
//! let rs = ReducedSpace::new(&FixedBasis::new(InnerProductKind::H10, snapshots))?;
//! let u_rb = rs.project(&u)?;
//! ```

pub mod reduced_space;
pub use reduced_space::ReducedSpace;
pub mod strategy;
pub use strategy::{BasisStrategy, FixedBasis};
