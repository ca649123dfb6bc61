//! Form Validation Error Types

use thiserror::Error;

/// Errors for out-of-domain form input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value out of allowed range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// No symptom selected
    #[error("Symptom must not be empty")]
    EmptySymptom,
}
