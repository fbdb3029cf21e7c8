// models/src/errors.rs

use serde::Serialize;
pub use thiserror::Error;

/// A single constraint failure on one field of a creation payload.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Text that must carry content was empty or only whitespace.
    #[error("value must not be empty")]
    Empty,
    /// A number fell outside its inclusive bounds.
    #[error("value must be between {min} and {max} inclusive, got {actual}")]
    OutOfRange { min: i64, max: i64, actual: i64 },
    #[error("invalid datetime format: {0}")]
    InvalidDateTime(String),
    #[error("invalid time format: {0}")]
    InvalidTime(String),
    /// The body could not be decoded into the expected shape at all.
    #[error("{0}")]
    Malformed(String),
}

/// Location and message of a failed constraint, in the `{loc, msg}` shape
/// returned to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub loc: Vec<String>,
    pub msg: String,
}

impl FieldViolation {
    pub fn new(field: &str, error: &ValidationError) -> Self {
        FieldViolation {
            loc: vec!["body".to_string(), field.to_string()],
            msg: error.to_string(),
        }
    }
}

/// Every constraint failure found in one payload.
#[derive(Debug, Clone, Default, Error, PartialEq, Eq)]
#[error("{} validation error(s)", .violations.len())]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// A payload-level failure that cannot be pinned to one field.
    pub fn malformed(message: impl Into<String>) -> Self {
        ValidationErrors {
            violations: vec![FieldViolation {
                loc: vec!["body".to_string()],
                msg: ValidationError::Malformed(message.into()).to_string(),
            }],
        }
    }

    pub fn add(&mut self, field: &str, error: ValidationError) {
        self.violations.push(FieldViolation::new(field, &error));
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// `Ok(())` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// A type alias for a `Result` that returns a `ValidationError` on failure.
pub type ValidationResult<T> = Result<T, ValidationError>;
