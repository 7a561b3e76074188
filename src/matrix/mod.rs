//! Matrix module: Gram matrices of function sets.

pub mod grammian;
pub use grammian::Grammian;
