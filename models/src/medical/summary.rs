// models/src/medical/summary.rs

use serde::{Deserialize, Serialize};

/// Accessibility-aware overview of one patient, phrased so a voice assistant
/// can read `message` aloud.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientSummary {
    pub patient_name: String,
    pub disability_type: Option<String>,
    pub assistive_needs: Vec<String>,
    pub appointments_count: usize,
    pub reminders_count: usize,
    pub message: String,
}
