// lib/src/summary.rs

use models::{Appointment, Patient, PatientSummary, Reminder};

/// Sentence a voice assistant reads to the patient.
pub fn voice_message(name: &str, appointments_count: usize, reminders_count: usize) -> String {
    format!(
        "Hello {name}. You have {appointments_count} appointments and {reminders_count} \
         reminders scheduled. This summary can be converted to voice output for accessibility."
    )
}

/// Joins a patient with the appointments and reminders already filtered to
/// that patient. Counts are taken from the slices, never stored.
pub fn summarize(
    patient: &Patient,
    appointments: &[Appointment],
    reminders: &[Reminder],
) -> PatientSummary {
    PatientSummary {
        patient_name: patient.name.clone(),
        disability_type: patient.disability_type.clone(),
        assistive_needs: patient.assistive_needs.clone(),
        appointments_count: appointments.len(),
        reminders_count: reminders.len(),
        message: voice_message(&patient.name, appointments.len(), reminders.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::Identifier;

    #[test]
    fn message_has_fixed_shape() {
        assert_eq!(
            voice_message("Ravi Kumar", 2, 1),
            "Hello Ravi Kumar. You have 2 appointments and 1 reminders scheduled. \
             This summary can be converted to voice output for accessibility."
        );
    }

    #[test]
    fn summary_of_patient_without_records() {
        let patient = Patient {
            id: Identifier::generate(),
            name: "Meera".to_string(),
            age: 8,
            disability_type: None,
            assistive_needs: vec!["large_text".to_string()],
        };
        let summary = summarize(&patient, &[], &[]);
        assert_eq!(summary.patient_name, "Meera");
        assert_eq!(summary.appointments_count, 0);
        assert_eq!(summary.reminders_count, 0);
        assert_eq!(summary.assistive_needs, vec!["large_text"]);
        assert!(summary.message.starts_with("Hello Meera. You have 0 appointments and 0 reminders"));
    }
}
