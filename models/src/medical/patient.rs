// models/src/medical/patient.rs

use serde::{Deserialize, Serialize};

use crate::errors::ValidationErrors;
use crate::identifiers::Identifier;
use crate::serde_helpers::{deserialize_whole_u8, null_as_default};
use crate::validation::{Validate, require_non_empty, require_range};

pub const AGE_MIN: u8 = 0;
pub const AGE_MAX: u8 = 120;

// --- DTO for New Patient Registration ---
// Carries everything but the identifier, which the store assigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPatient {
    pub name: String,
    #[serde(deserialize_with = "deserialize_whole_u8")]
    pub age: u8,
    #[serde(default)]
    pub disability_type: Option<String>,
    /// Assistive features the patient relies on, e.g. `voice_instructions`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub assistive_needs: Vec<String>,
}

impl Validate for NewPatient {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        require_non_empty(&mut errors, "name", &self.name);
        require_range(
            &mut errors,
            "age",
            i64::from(self.age),
            i64::from(AGE_MIN),
            i64::from(AGE_MAX),
        );
        errors.into_result()
    }
}

// --- Stored Patient Struct ---
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: Identifier,
    pub name: String,
    pub age: u8,
    pub disability_type: Option<String>,
    pub assistive_needs: Vec<String>,
}

impl Patient {
    pub fn from_new_patient(id: Identifier, new_patient: NewPatient) -> Self {
        Patient {
            id,
            name: new_patient.name,
            age: new_patient.age,
            disability_type: new_patient.disability_type,
            assistive_needs: new_patient.assistive_needs,
        }
    }
}
