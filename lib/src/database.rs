// lib/src/database.rs
// One explicitly constructed state object owning the three entity stores.
// Handlers receive it by reference; tests build a fresh one each time.

use models::{
    Appointment, Identifier, NewAppointment, NewPatient, NewReminder, Patient, PatientOwned,
    PatientSummary, Reminder,
};
use tracing::{debug, info, warn};

use crate::errors::{ClinicError, Result};
use crate::storage_engine::InMemoryStorage;
use crate::summary::summarize;

#[derive(Debug)]
pub struct ClinicDatabase {
    patients: InMemoryStorage<Patient>,
    appointments: InMemoryStorage<Appointment>,
    reminders: InMemoryStorage<Reminder>,
}

impl Default for ClinicDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl ClinicDatabase {
    pub fn new() -> Self {
        ClinicDatabase {
            patients: InMemoryStorage::new("patients"),
            appointments: InMemoryStorage::new("appointments"),
            reminders: InMemoryStorage::new("reminders"),
        }
    }

    pub fn patients(&self) -> &InMemoryStorage<Patient> {
        &self.patients
    }

    pub fn appointments(&self) -> &InMemoryStorage<Appointment> {
        &self.appointments
    }

    pub fn reminders(&self) -> &InMemoryStorage<Reminder> {
        &self.reminders
    }

    // --- Patients ---

    pub async fn create_patient(&self, new_patient: NewPatient) -> Patient {
        let patient = self
            .patients
            .insert(|id| Patient::from_new_patient(id, new_patient))
            .await;
        info!(patient_id = %patient.id, "registered patient");
        patient
    }

    pub async fn list_patients(&self) -> Vec<Patient> {
        self.patients.list_all().await
    }

    pub async fn get_patient(&self, patient_id: &str) -> Result<Patient> {
        self.patients
            .get(patient_id)
            .await
            .ok_or_else(|| ClinicError::patient_not_found(patient_id))
    }

    // --- Appointments ---

    /// Books an appointment for an existing patient. The appointment store
    /// stays locked from the patient check until the insert completes.
    pub async fn create_appointment(&self, new_appointment: NewAppointment) -> Result<Appointment> {
        let mut writer = self.appointments.write().await;
        self.ensure_patient_reference(&new_appointment.patient_id).await?;
        let appointment = writer.insert(|id| Appointment::from_new_appointment(id, new_appointment));
        info!(appointment_id = %appointment.id, patient_id = %appointment.patient_id, "booked appointment");
        Ok(appointment)
    }

    pub async fn list_patient_appointments(&self, patient_id: &str) -> Result<Vec<Appointment>> {
        let patient = self.get_patient(patient_id).await?;
        Ok(owned_by(&self.appointments, &patient.id).await)
    }

    // --- Reminders ---

    pub async fn create_reminder(&self, new_reminder: NewReminder) -> Result<Reminder> {
        let mut writer = self.reminders.write().await;
        self.ensure_patient_reference(&new_reminder.patient_id).await?;
        let reminder = writer.insert(|id| Reminder::from_new_reminder(id, new_reminder));
        info!(reminder_id = %reminder.id, patient_id = %reminder.patient_id, "scheduled reminder");
        Ok(reminder)
    }

    pub async fn list_patient_reminders(&self, patient_id: &str) -> Result<Vec<Reminder>> {
        let patient = self.get_patient(patient_id).await?;
        Ok(owned_by(&self.reminders, &patient.id).await)
    }

    // --- Summary ---

    pub async fn patient_summary(&self, patient_id: &str) -> Result<PatientSummary> {
        let patient = self.get_patient(patient_id).await?;
        let appointments = owned_by(&self.appointments, &patient.id).await;
        let reminders = owned_by(&self.reminders, &patient.id).await;
        debug!(
            patient_id = %patient.id,
            appointments = appointments.len(),
            reminders = reminders.len(),
            "built patient summary"
        );
        Ok(summarize(&patient, &appointments, &reminders))
    }

    async fn ensure_patient_reference(&self, patient_id: &Identifier) -> Result<()> {
        if self.patients.contains(patient_id).await {
            Ok(())
        } else {
            warn!(%patient_id, "rejected reference to unknown patient");
            Err(ClinicError::invalid_patient_id(patient_id.as_str()))
        }
    }
}

async fn owned_by<T>(store: &InMemoryStorage<T>, patient_id: &Identifier) -> Vec<T>
where
    T: PatientOwned + Clone,
{
    store.list_where(|record| record.belongs_to(patient_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn new_patient(name: &str) -> NewPatient {
        NewPatient {
            name: name.to_string(),
            age: 35,
            disability_type: Some("Visual impairment".to_string()),
            assistive_needs: vec!["voice_instructions".to_string()],
        }
    }

    fn new_appointment(patient_id: &Identifier, doctor: &str) -> NewAppointment {
        NewAppointment {
            patient_id: patient_id.clone(),
            doctor_name: doctor.to_string(),
            department: "Orthopedics".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 12, 3)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
            is_virtual: true,
        }
    }

    fn new_reminder(patient_id: &Identifier, message: &str) -> NewReminder {
        NewReminder {
            patient_id: patient_id.clone(),
            message: message.to_string(),
            reminder_time: NaiveTime::from_hms_opt(15, 30, 0).unwrap(),
            channel: "voice".to_string(),
        }
    }

    fn unknown() -> Identifier {
        "does-not-exist".parse().unwrap()
    }

    #[tokio::test]
    async fn create_then_get_patient() {
        let db = ClinicDatabase::new();
        let created = db.create_patient(new_patient("Ravi Kumar")).await;

        assert!(!created.id.is_empty());
        assert_eq!(created.name, "Ravi Kumar");
        assert_eq!(db.get_patient(&created.id).await, Ok(created.clone()));
        assert_eq!(db.list_patients().await, vec![created]);
    }

    #[tokio::test]
    async fn unknown_patient_is_not_found_everywhere() {
        let db = ClinicDatabase::new();
        db.create_patient(new_patient("Someone Else")).await;
        let expected = ClinicError::patient_not_found("does-not-exist");

        assert_eq!(db.get_patient("does-not-exist").await, Err(expected.clone()));
        assert_eq!(db.list_patient_appointments("does-not-exist").await, Err(expected.clone()));
        assert_eq!(db.list_patient_reminders("does-not-exist").await, Err(expected.clone()));
        assert_eq!(db.patient_summary("does-not-exist").await, Err(expected));
    }

    #[tokio::test]
    async fn unknown_reference_leaves_stores_unchanged() {
        let db = ClinicDatabase::new();

        let appointment = db.create_appointment(new_appointment(&unknown(), "Dr. Mehta")).await;
        assert_eq!(appointment, Err(ClinicError::invalid_patient_id("does-not-exist")));

        let reminder = db.create_reminder(new_reminder(&unknown(), "Physiotherapy")).await;
        assert_eq!(reminder, Err(ClinicError::invalid_patient_id("does-not-exist")));

        assert!(db.appointments().is_empty().await);
        assert!(db.reminders().is_empty().await);
    }

    #[tokio::test]
    async fn listings_are_filtered_per_patient_in_creation_order() {
        let db = ClinicDatabase::new();
        let ravi = db.create_patient(new_patient("Ravi Kumar")).await;
        let asha = db.create_patient(new_patient("Asha Rao")).await;

        let mut ravi_doctors = Vec::new();
        for (i, owner) in [&ravi, &asha, &ravi, &asha, &asha, &ravi].into_iter().enumerate() {
            let doctor = format!("Dr. {i}");
            db.create_appointment(new_appointment(&owner.id, &doctor)).await.unwrap();
            if owner.id == ravi.id {
                ravi_doctors.push(doctor);
            }
        }

        let listed: Vec<String> = db
            .list_patient_appointments(&ravi.id)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.doctor_name)
            .collect();
        assert_eq!(listed, ravi_doctors);
        assert_eq!(db.list_patient_appointments(&asha.id).await.unwrap().len(), 3);
        assert!(db.list_patient_reminders(&asha.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn summary_counts_match_listings() {
        let db = ClinicDatabase::new();
        let ravi = db.create_patient(new_patient("Ravi Kumar")).await;
        let other = db.create_patient(new_patient("Other")).await;

        db.create_appointment(new_appointment(&ravi.id, "Dr. Mehta")).await.unwrap();
        db.create_appointment(new_appointment(&ravi.id, "Dr. Iyer")).await.unwrap();
        db.create_appointment(new_appointment(&other.id, "Dr. Iyer")).await.unwrap();
        db.create_reminder(new_reminder(&ravi.id, "Physiotherapy")).await.unwrap();

        let summary = db.patient_summary(&ravi.id).await.unwrap();
        assert_eq!(summary.appointments_count, 2);
        assert_eq!(summary.reminders_count, 1);
        assert_eq!(
            summary.appointments_count,
            db.list_patient_appointments(&ravi.id).await.unwrap().len()
        );
        assert!(summary.message.contains("Hello Ravi Kumar"));
        assert!(summary.message.contains("2 appointments and 1 reminders"));
    }
}
