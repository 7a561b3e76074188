use thiserror::Error;

// Unified error type for rbspace

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RbError {
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("empty input: {0}")]
    EmptyInput(&'static str),
    #[error("reduced basis is empty")]
    EmptyBasis,
    #[error("grammian is not positive definite (pivot {pivot:e} at row {row})")]
    NotPositiveDefinite { row: usize, pivot: f64 },
    #[error("numerical error: {0}")]
    NumericalError(String),
}
