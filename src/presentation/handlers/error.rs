use std::any::Any;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::{DispatchError, ErrorKind};

pub const UNEXPECTED_ERROR_MESSAGE: &str = "Unexpected error.";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A failure that has reached the HTTP boundary.
#[derive(Debug)]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
}

impl ApiError {
    pub fn unexpected() -> Self {
        Self {
            kind: ErrorKind::Unexpected,
            message: UNEXPECTED_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> StatusCode {
        match self.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Backend => StatusCode::BAD_GATEWAY,
            ErrorKind::BackendTimeout => StatusCode::GATEWAY_TIMEOUT,
            ErrorKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DispatchError> for ApiError {
    fn from(error: DispatchError) -> Self {
        Self {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self.kind {
            ErrorKind::Validation | ErrorKind::PayloadTooLarge | ErrorKind::NotFound => {
                tracing::warn!(status = status.as_u16(), error = %self.message, "Request rejected");
            }
            _ => {
                tracing::error!(status = status.as_u16(), error = %self.message, "Request failed");
            }
        }

        (
            status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

/// Turns a handler panic into the generic 500 payload.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");

    tracing::error!(panic = %detail, "Handler panicked");

    ApiError::unexpected().into_response()
}
