use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use k1_derive::api_model;
use std::any::Any;
use std::borrow::Cow;
use tracing::{error, warn};

/// Message returned for every server-side failure; details stay in the logs.
const INTERNAL_MESSAGE: &str = "Internal server error";

/// Errors a handler can return. Rendered as `{"error": "..."}`.
#[k1_derive::k1_error]
pub enum ApiError {
    /// The request could not be understood (missing or malformed fields).
    #[error("Invalid request{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[api_model]
/// Error payload of every failed request.
pub struct ErrorBody {
    /// Human-readable description of the failure
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match &self {
            Self::Validation { .. } => {
                warn!(%status, error = %self, "Rejected request");
                self.to_string()
            }
            Self::Internal { .. } => {
                error!(%status, error = %self, "Error processing request");
                INTERNAL_MESSAGE.to_owned()
            }
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

/// Converts a panic caught by `tower_http::catch_panic` into the JSON error payload.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_owned());

    ApiError::Internal { message: detail.into(), context: Some("handler panicked".into()) }
        .into_response()
}
