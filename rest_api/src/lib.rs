// rest_api/src/lib.rs

use std::any::Any;
use std::future::Future;

use anyhow::{Context, Error as AnyhowError};
use axum::{
    http::Method,
    response::{IntoResponse, Response},
    routing::get,
    routing::post,
    Router,
};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod config;
pub mod errors;
pub mod extract;
pub mod handlers;
pub mod state;

pub use crate::config::{load_rest_api_config, RestApiConfig};
pub use crate::errors::RestApiError;
pub use crate::extract::ValidatedJson;
pub use crate::state::AppState;

use crate::handlers::*;

/// Builds the full router over the given state.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(AnyOrigin);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check_handler))
        .route("/docs", get(docs_handler))
        .route("/patients", post(create_patient_handler).get(list_patients_handler))
        .route("/patients/:patient_id", get(get_patient_handler))
        .route("/patients/:patient_id/appointments", get(list_patient_appointments_handler))
        .route("/patients/:patient_id/reminders", get(list_patient_reminders_handler))
        .route("/appointments", post(create_appointment_handler))
        .route("/reminders", post(create_reminder_handler))
        .route("/assistant/summary/:patient_id", get(assistant_summary_handler))
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let msg = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };
    RestApiError::Internal(msg).into_response()
}

// Main function to start the REST API server
pub async fn start_server<F>(config: RestApiConfig, shutdown: F) -> Result<(), AnyhowError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to address: {addr}"))?;
    info!("REST API server listening on {}", listener.local_addr()?);

    axum::serve(listener, build_router(AppState::default()))
        .with_graceful_shutdown(shutdown)
        .await
        .context("REST API server failed to start or run")?;

    info!("REST API server stopped.");
    Ok(())
}
