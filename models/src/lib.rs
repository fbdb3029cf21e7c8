// models/src/lib.rs
// Shared record types for the assistant: stored entities, creation payloads,
// identifiers and validation.

pub mod errors;
pub mod identifiers;
pub mod medical;
pub mod serde_helpers;
pub mod validation;

pub use errors::{FieldViolation, ValidationError, ValidationErrors, ValidationResult};
pub use identifiers::Identifier;
pub use medical::{
    Appointment, NewAppointment, NewPatient, NewReminder, Patient, PatientOwned, PatientSummary,
    Reminder,
};
pub use validation::Validate;
