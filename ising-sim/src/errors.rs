use thiserror::Error;

/// Crate-wide error type.
///
/// Construction errors (`InvalidDimension`, `InvalidTemperature`) are fatal:
/// no partially built value is observable. Usage-ordering and shape errors
/// leave all state unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("lattice dimensions must be positive, got {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("inverse temperature must be positive, got {beta}")]
    InvalidTemperature { beta: f64 },

    #[error("site index {index} out of range for lattice of {size} sites")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("configuration length {actual} does not match lattice size {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("configuration is uninitialized; call randomize_conf first")]
    UninitializedConfiguration,

    #[error("invalid sampling schedule: {0}")]
    InvalidSchedule(String),
}
