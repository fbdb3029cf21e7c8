// rest_api/src/handlers.rs

use axum::{
    extract::{Path, State},
    Json,
};
use models::{
    Appointment, NewAppointment, NewPatient, NewReminder, Patient, PatientSummary, Reminder,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::errors::RestApiError;
use crate::extract::ValidatedJson;
use crate::state::AppState;

pub const SERVICE_NAME: &str = "manas-360-assistant";

/// One row of the route table served at `/docs`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RouteDoc {
    pub method: &'static str,
    pub path: &'static str,
    pub summary: &'static str,
    pub tag: &'static str,
}

pub const ROUTES: &[RouteDoc] = &[
    RouteDoc { method: "GET", path: "/", summary: "Welcome document", tag: "system" },
    RouteDoc { method: "GET", path: "/health", summary: "Liveness check", tag: "system" },
    RouteDoc { method: "GET", path: "/docs", summary: "This route table", tag: "system" },
    RouteDoc { method: "POST", path: "/patients", summary: "Create a patient", tag: "patients" },
    RouteDoc { method: "GET", path: "/patients", summary: "List patients", tag: "patients" },
    RouteDoc { method: "GET", path: "/patients/{patient_id}", summary: "Fetch a patient", tag: "patients" },
    RouteDoc { method: "POST", path: "/appointments", summary: "Book an appointment", tag: "appointments" },
    RouteDoc {
        method: "GET",
        path: "/patients/{patient_id}/appointments",
        summary: "List a patient's appointments",
        tag: "appointments",
    },
    RouteDoc { method: "POST", path: "/reminders", summary: "Schedule a reminder", tag: "accessibility" },
    RouteDoc {
        method: "GET",
        path: "/patients/{patient_id}/reminders",
        summary: "List a patient's reminders",
        tag: "accessibility",
    },
    RouteDoc {
        method: "GET",
        path: "/assistant/summary/{patient_id}",
        summary: "Accessibility-aware daily summary for a patient",
        tag: "assistant",
    },
];

// Handler for the / endpoint
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Welcome to Manas 360 Hospital Assistant API",
        "docs_url": "/docs",
        "health_url": "/health",
        "description": "Use /docs to explore all endpoints.",
    }))
}

// Handler for the /health endpoint
pub async fn health_check_handler() -> Json<Value> {
    Json(json!({ "status": "ok", "service": SERVICE_NAME }))
}

// Handler for the /docs endpoint
pub async fn docs_handler() -> Json<Value> {
    Json(json!({
        "title": "Manas 360 Hospital Assistant",
        "version": env!("CARGO_PKG_VERSION"),
        "routes": ROUTES,
    }))
}

// ---------- Patients ----------

pub async fn create_patient_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewPatient>,
) -> Json<Patient> {
    Json(state.db.create_patient(payload).await)
}

pub async fn list_patients_handler(State(state): State<AppState>) -> Json<Vec<Patient>> {
    Json(state.db.list_patients().await)
}

pub async fn get_patient_handler(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> Result<Json<Patient>, RestApiError> {
    Ok(Json(state.db.get_patient(&patient_id).await?))
}

// ---------- Appointments ----------

pub async fn create_appointment_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewAppointment>,
) -> Result<Json<Appointment>, RestApiError> {
    Ok(Json(state.db.create_appointment(payload).await?))
}

pub async fn list_patient_appointments_handler(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> Result<Json<Vec<Appointment>>, RestApiError> {
    Ok(Json(state.db.list_patient_appointments(&patient_id).await?))
}

// ---------- Reminders ----------

pub async fn create_reminder_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewReminder>,
) -> Result<Json<Reminder>, RestApiError> {
    Ok(Json(state.db.create_reminder(payload).await?))
}

pub async fn list_patient_reminders_handler(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> Result<Json<Vec<Reminder>>, RestApiError> {
    Ok(Json(state.db.list_patient_reminders(&patient_id).await?))
}

// ---------- Assistant ----------

/// Summary a voice assistant can read out to the patient.
pub async fn assistant_summary_handler(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> Result<Json<PatientSummary>, RestApiError> {
    Ok(Json(state.db.patient_summary(&patient_id).await?))
}
