//! Error handler for converting AppError to HTTP responses.
//!
//! Every error becomes a status code plus a `text/plain` body carrying the
//! error message. Server-side failures are logged before they are rendered.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::AppError;

/// Maps an error to the HTTP status it is rendered with.
///
/// # Status Code Mapping
/// - ValidationErrors → 400 BAD_REQUEST
/// - BadRequest → 400 BAD_REQUEST
/// - UnprocessableContent → 422 UNPROCESSABLE_ENTITY
/// - Database, ConnectionPool, Configuration, Internal → 500 INTERNAL_SERVER_ERROR
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::ValidationErrors { .. } | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::UnprocessableContent { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        AppError::Database { .. }
        | AppError::ConnectionPool { .. }
        | AppError::Configuration { .. }
        | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %message, "Request rejected");
        }

        // A String body is sent as text/plain; charset=utf-8
        (status, message).into_response()
    }
}
