// rest_api/src/state.rs

use std::sync::Arc;

use assistant_lib::ClinicDatabase;

// Shared state for the Axum application
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub db: Arc<ClinicDatabase>,
}
