//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::{FormRejection, JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use muebles_domain::error::{MueblesError, NotFoundError, ValidationError};

use crate::envelope::{Envelope, messages};

/// Maps [`MueblesError`] to an HTTP response with appropriate status code.
///
/// Clients only ever see one of the fixed messages; details stay in the logs.
#[derive(Debug)]
pub struct ApiError(MueblesError);

impl From<MueblesError> for ApiError {
    fn from(err: MueblesError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(%rejection, "rejected request body");
        Self(ValidationError::MalformedBody.into())
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        tracing::debug!(%rejection, "rejected form body");
        Self(ValidationError::MalformedBody.into())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(%rejection, "rejected query string");
        Self(ValidationError::MalformedQuery.into())
    }
}

// an undecodable path segment cannot name a stored item
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(%rejection, "rejected path parameter");
        Self(
            NotFoundError {
                entity: "Furniture",
                code: String::new(),
            }
            .into(),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            MueblesError::Validation(err) => {
                tracing::debug!(error = %err, "validation failed");
                (StatusCode::BAD_REQUEST, messages::MISSING_DATA)
            }
            // kept as 400 for compatibility with existing clients
            MueblesError::NotFound(err) => {
                tracing::debug!(error = %err, "lookup missed");
                (StatusCode::BAD_REQUEST, messages::NOT_FOUND)
            }
            MueblesError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, messages::SERVER_ERROR)
            }
        };

        (status, Json(Envelope::message(message))).into_response()
    }
}
