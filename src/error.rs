//! Typed errors and HTTP mapping onto the `{status, reason}` envelope.

use crate::response::error_envelope;
use crate::service::ValidationErrors;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use thiserror::Error;

/// Reason reported for every 404, whether the id was malformed or absent.
pub const NOT_FOUND_REASON: &str = "Not found";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Must define {0} (used for db name)")]
    MissingEnvironment(&'static str),
    #[error("invalid {var}: {message}")]
    Invalid { var: &'static str, message: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found")]
    NotFound,
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("{0}")]
    BadRequest(String),
    #[error("Payload too large")]
    PayloadTooLarge,
    #[error("{0}")]
    Unavailable(String),
    #[error(transparent)]
    Db(#[from] sqlx::Error),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Db(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            AppError::Db(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The `reason` member of the envelope: field messages for validation, text otherwise.
    pub fn reason(&self) -> Value {
        match self {
            AppError::Validation(errors) => serde_json::to_value(errors).unwrap_or(Value::Null),
            AppError::Db(sqlx::Error::RowNotFound) => Value::String(NOT_FOUND_REASON.into()),
            other => Value::String(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        }
        error_envelope(status, self.reason())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_uses_fixed_reason() {
        let err = AppError::NotFound;
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.reason(), Value::String("Not found".into()));
    }

    #[test]
    fn validation_reason_is_field_map() {
        let mut errors = ValidationErrors::default();
        errors.add("name", "Name must not be blank");
        let err = AppError::Validation(errors);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.reason(),
            serde_json::json!({ "name": ["Name must not be blank"] })
        );
    }

    #[test]
    fn internal_passes_message_through() {
        let err = AppError::Internal("disk on fire".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.reason(), Value::String("disk on fire".into()));
    }

    #[test]
    fn missing_environment_message_names_variable() {
        let err = ConfigError::MissingEnvironment("THING_ENV");
        assert_eq!(err.to_string(), "Must define THING_ENV (used for db name)");
    }
}
