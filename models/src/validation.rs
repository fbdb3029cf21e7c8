// models/src/validation.rs

use crate::errors::{ValidationError, ValidationErrors};

/// Constraints a creation payload must satisfy beyond what its Rust type
/// already guarantees (presence and JSON type are enforced by decoding).
pub trait Validate {
    /// Checks every constraint and reports all failures at once.
    fn validate(&self) -> Result<(), ValidationErrors>;
}

pub(crate) fn require_non_empty(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, ValidationError::Empty);
    }
}

pub(crate) fn require_range(
    errors: &mut ValidationErrors,
    field: &str,
    value: i64,
    min: i64,
    max: i64,
) {
    if !(min..=max).contains(&value) {
        errors.add(field, ValidationError::OutOfRange { min, max, actual: value });
    }
}
