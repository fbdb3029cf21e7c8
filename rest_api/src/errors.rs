// rest_api/src/errors.rs

use assistant_lib::ClinicError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use models::ValidationErrors;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error};

// Define the REST API error enum
#[derive(Debug, Error)]
pub enum RestApiError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Clinic(#[from] ClinicError),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RestApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RestApiError::Clinic(ClinicError::NotFound { .. }) => StatusCode::NOT_FOUND,
            RestApiError::Clinic(ClinicError::InvalidReference { .. }) => StatusCode::BAD_REQUEST,
            RestApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Implement IntoResponse for RestApiError to convert it into an HTTP response
impl IntoResponse for RestApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = match self {
            RestApiError::Validation(errors) => {
                debug!(%errors, "rejected payload");
                json!(errors.violations())
            }
            RestApiError::Clinic(ClinicError::NotFound { entity, .. }) => {
                json!(format!("{entity} not found"))
            }
            RestApiError::Clinic(ClinicError::InvalidReference { field, .. }) => {
                json!(format!("Invalid {field}"))
            }
            RestApiError::Internal(msg) => {
                error!(%msg, "request failed");
                json!("Internal server error")
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_category_to_its_status() {
        let validation = RestApiError::from(ValidationErrors::malformed("bad body"));
        assert_eq!(validation.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let missing = RestApiError::from(ClinicError::patient_not_found("x"));
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

        let reference = RestApiError::from(ClinicError::invalid_patient_id("x"));
        assert_eq!(reference.status_code(), StatusCode::BAD_REQUEST);

        let internal = RestApiError::Internal("boom".to_string());
        assert_eq!(internal.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
