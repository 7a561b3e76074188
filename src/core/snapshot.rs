//! Parameter-tagged functions: PDE snapshots and sensors.

use crate::core::function::FullSpaceVector;

/// What a parametrized function represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapshotRole {
    /// Full-order PDE solution for one parameter value.
    Snapshot,
    /// Riesz representer of a linear functional.
    Sensor,
}

/// A `FullSpaceVector` tagged with the parameter vector that produced it.
#[derive(Debug, Clone)]
pub struct ParametrizedSnapshot {
    function: FullSpaceVector,
    role: SnapshotRole,
    param: Vec<f64>,
}

impl ParametrizedSnapshot {
    pub fn new(function: FullSpaceVector, role: SnapshotRole, param: Vec<f64>) -> Self {
        Self { function, role, param }
    }

    pub fn snapshot(function: FullSpaceVector, param: Vec<f64>) -> Self {
        Self::new(function, SnapshotRole::Snapshot, param)
    }

    pub fn sensor(function: FullSpaceVector, param: Vec<f64>) -> Self {
        Self::new(function, SnapshotRole::Sensor, param)
    }

    pub fn function(&self) -> &FullSpaceVector {
        &self.function
    }

    pub fn role(&self) -> SnapshotRole {
        self.role
    }

    pub fn param(&self) -> &[f64] {
        &self.param
    }
}

impl AsRef<FullSpaceVector> for ParametrizedSnapshot {
    fn as_ref(&self) -> &FullSpaceVector {
        &self.function
    }
}
