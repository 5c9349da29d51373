use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::debug;
use vinyl_domain::DomainError;

/// A store failure tagged with the management operation that hit it.
///
/// The body carries `"<Operation>: <cause>"`; the HTTP status is derived
/// from the error kind.
#[derive(Debug)]
pub struct ApiError {
    pub operation: &'static str,
    pub error: DomainError,
}

impl ApiError {
    pub fn new(operation: &'static str, error: DomainError) -> Self {
        Self { operation, error }
    }

    pub fn status(&self) -> StatusCode {
        match &self.error {
            DomainError::ExistingRecord { .. } => StatusCode::CONFLICT,
            DomainError::MissingRecord { .. } => StatusCode::NOT_FOUND,
            e if e.is_validation() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        format!("{}: {}", self.operation, self.error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        debug!(status = %status, error = %message, "Management request failed");

        (status, Json(json!({ "error": message }))).into_response()
    }
}
