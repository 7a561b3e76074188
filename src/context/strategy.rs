//! Basis-construction strategies.
//!
//! A strategy decides which parameters to sample and hands back the resulting
//! snapshots together with the inner product the reduced space should use.
//! Greedy, random or POD-style selection all live behind this trait; the
//! reduced space treats the strategy as an opaque factory.

use crate::core::snapshot::ParametrizedSnapshot;
use crate::space::hilbert::InnerProductKind;

/// Supplies the ordered snapshot list a reduced space is built from.
pub trait BasisStrategy {
    fn generate_basis(&self) -> (InnerProductKind, Vec<ParametrizedSnapshot>);
}

/// A strategy returning a snapshot list fixed in advance.
#[derive(Debug, Clone)]
pub struct FixedBasis {
    kind: InnerProductKind,
    snapshots: Vec<ParametrizedSnapshot>,
}

impl FixedBasis {
    pub fn new(kind: InnerProductKind, snapshots: Vec<ParametrizedSnapshot>) -> Self {
        Self { kind, snapshots }
    }
}

impl BasisStrategy for FixedBasis {
    fn generate_basis(&self) -> (InnerProductKind, Vec<ParametrizedSnapshot>) {
        (self.kind, self.snapshots.clone())
    }
}
