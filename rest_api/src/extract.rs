// rest_api/src/extract.rs

use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use models::{Validate, ValidationErrors};
use serde::de::DeserializeOwned;

use crate::errors::RestApiError;

/// JSON body that has been decoded and checked against its `Validate`
/// constraints. Any failure becomes a 422 before the handler runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = RestApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_validation)?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

// Syntax errors, missing content type and type mismatches are all schema
// violations from the client's point of view.
fn rejection_to_validation(rejection: JsonRejection) -> RestApiError {
    RestApiError::Validation(ValidationErrors::malformed(rejection.body_text()))
}
