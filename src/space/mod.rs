//! Function spaces: inner-product spaces and a dense reference discretization.

pub mod dense;
pub mod hilbert;

pub use dense::DenseSpace;
pub use hilbert::{HilbertSpace, InnerProductKind};
