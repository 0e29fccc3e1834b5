// Domain errors - Error types for the domain layer

use std::fmt;

/// Reasons a transcoding request is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Required field is empty or whitespace only
    MissingField(&'static str),
    /// Numeric field outside its allowed range
    OutOfRange {
        field: &'static str,
        value: i64,
        expected: &'static str,
    },
    /// Preset name not in the x264 preset set
    InvalidPreset(String),
}

impl DomainError {
    /// Name of the request field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            DomainError::MissingField(field) => field,
            DomainError::OutOfRange { field, .. } => field,
            DomainError::InvalidPreset(_) => "preset",
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::MissingField(field) => write!(f, "{} required", field),
            DomainError::OutOfRange { field, value, expected } => {
                write!(f, "{} must be {} (got {})", field, expected, value)
            }
            DomainError::InvalidPreset(value) => write!(f, "invalid preset: {}", value),
        }
    }
}

impl std::error::Error for DomainError {}
