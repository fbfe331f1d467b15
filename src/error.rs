// src/error.rs
use std::fmt;

/// Error types for the multistep-ode library
///
/// Numerical divergence is never reported through this type: large,
/// infinite or NaN states are results of the method under test and flow
/// through solvers and reports unmodified.
#[derive(Debug, Clone, PartialEq)]
pub enum OdeError {
    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration
    InvalidConfiguration { field: String, reason: String },

    /// Sequences that must be index-aligned have different lengths
    LengthMismatch { expected: usize, actual: usize },

    /// Reduction over a sequence with no elements
    EmptySequence { context: String },

    /// Failure while writing a report
    Io { path: String, reason: String },
}

impl fmt::Display for OdeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OdeError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            OdeError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            OdeError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "Length mismatch: expected {} elements, got {}",
                    expected, actual
                )
            }
            OdeError::EmptySequence { context } => {
                write!(f, "Empty sequence in {}", context)
            }
            OdeError::Io { path, reason } => {
                write!(f, "I/O error writing '{}': {}", path, reason)
            }
        }
    }
}

impl std::error::Error for OdeError {}

/// Result type alias for multistep-ode operations
pub type OdeResult<T> = Result<T, OdeError>;

/// Validation utilities
pub mod validation {
    use super::{OdeError, OdeResult};

    /// Largest step count a single run may request
    pub const MAX_STEPS: usize = 100_000_000;

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> OdeResult<()> {
        validate_finite(name, value)?;
        if value <= 0.0 {
            Err(OdeError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> OdeResult<()> {
        validate_finite(name, value)?;
        if value < 0.0 {
            Err(OdeError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> OdeResult<()> {
        if !value.is_finite() {
            Err(OdeError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate steps count
    pub fn validate_steps(steps: usize) -> OdeResult<()> {
        if steps > MAX_STEPS {
            Err(OdeError::InvalidConfiguration {
                field: "steps".to_string(),
                reason: format!("exceeds maximum allowed ({})", MAX_STEPS),
            })
        } else {
            Ok(())
        }
    }
}
