//! Error handling logic

use thiserror::Error;

/// Failures raised around the state mapper.
///
/// The mapping itself is total; these arise when a caller asks for the
/// angle domain to be enforced, when a derived state is validated, or when a
/// scene configuration is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BlochError {
    /// An angle lies outside its slider range.
    #[error("Angle Out Of Range: {name} = {value} not in [{min}, {max}]")]
    AngleOutOfRange {
        /// Angle name (`theta` or `phi`)
        name: &'static str,
        /// Offending value
        value: f64,
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },

    /// An angle is NaN or infinite.
    #[error("Non-Finite Angle: {name}")]
    NonFiniteAngle {
        /// Angle name (`theta` or `phi`)
        name: &'static str,
    },

    /// A vector or amplitude set does not have unit norm.
    #[error("Denormalized {what}: norm {norm} deviates from 1 by more than {tolerance:e}")]
    Denormalized {
        /// What was checked
        what: &'static str,
        /// Measured norm
        norm: f64,
        /// Tolerance used
        tolerance: f64,
    },

    /// Direction and amplitudes describe different states.
    #[error("Inconsistent State: {message}")]
    Inconsistent {
        /// Inconsistent failure message
        message: String,
    },

    /// A scene or control configuration cannot be used.
    #[error("Invalid Config: {message}")]
    InvalidConfig {
        /// InvalidConfig failure message
        message: String,
    },
}
