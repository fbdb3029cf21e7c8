// models/src/medical/appointment.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::PatientOwned;
use crate::errors::ValidationErrors;
use crate::identifiers::Identifier;
use crate::serde_helpers::deserialize_datetime;
use crate::validation::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub patient_id: Identifier,
    pub doctor_name: String,
    pub department: String,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub date: NaiveDateTime,
    /// Virtual appointments can be joined online.
    #[serde(default)]
    pub is_virtual: bool,
}

impl Validate for NewAppointment {
    // Presence, types and the date format are all enforced while decoding.
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Identifier,
    pub patient_id: Identifier,
    pub doctor_name: String,
    pub department: String,
    pub date: NaiveDateTime,
    pub is_virtual: bool,
}

impl Appointment {
    pub fn from_new_appointment(id: Identifier, new_appointment: NewAppointment) -> Self {
        Appointment {
            id,
            patient_id: new_appointment.patient_id,
            doctor_name: new_appointment.doctor_name,
            department: new_appointment.department,
            date: new_appointment.date,
            is_virtual: new_appointment.is_virtual,
        }
    }
}

impl PatientOwned for Appointment {
    fn patient_id(&self) -> &Identifier {
        &self.patient_id
    }
}
