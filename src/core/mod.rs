//! Core types: the discretization seam, full-space functions and their algebra.

pub mod traits;
pub mod function;
pub mod combination;
pub mod snapshot;

pub use traits::{FunctionSpace, InnerProduct, Integrand};
pub use function::FullSpaceVector;
pub use combination::linear_combination;
pub use snapshot::{ParametrizedSnapshot, SnapshotRole};
