// models/src/medical/mod.rs

pub mod appointment;
pub mod patient;
pub mod reminder;
pub mod summary;

pub use appointment::{Appointment, NewAppointment};
pub use patient::{NewPatient, Patient};
pub use reminder::{NewReminder, Reminder};
pub use summary::PatientSummary;

use crate::identifiers::Identifier;

/// A record that belongs to exactly one patient.
pub trait PatientOwned {
    fn patient_id(&self) -> &Identifier;

    fn belongs_to(&self, patient_id: &Identifier) -> bool {
        self.patient_id() == patient_id
    }
}
