// lib/src/errors.rs

use thiserror::Error;

/// Business outcomes a handler operation can report besides success.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClinicError {
    /// The addressed resource does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A well-formed payload referenced a record that does not exist.
    #[error("invalid {field}: {id}")]
    InvalidReference { field: &'static str, id: String },
}

impl ClinicError {
    pub fn patient_not_found(id: impl Into<String>) -> Self {
        ClinicError::NotFound { entity: "Patient", id: id.into() }
    }

    pub fn invalid_patient_id(id: impl Into<String>) -> Self {
        ClinicError::InvalidReference { field: "patient_id", id: id.into() }
    }
}

pub type Result<T> = std::result::Result<T, ClinicError>;
