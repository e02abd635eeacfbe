use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DomainError;
use tracing::error;

/// Failure at the handler boundary.
///
/// Every variant is answered with a bare `500`: clients get no error body and
/// cannot tell a duplicate id from a malformed payload or a storage fault.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "Request failed");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
