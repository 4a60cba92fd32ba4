//! Response helpers: JSON bodies, the error envelope, and bare statuses.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

/// Uniform error body.
#[derive(Serialize)]
pub struct ErrorEnvelope {
    pub status: u16,
    pub reason: Value,
}

pub fn error_envelope(status: StatusCode, reason: Value) -> Response {
    (
        status,
        Json(ErrorEnvelope {
            status: status.as_u16(),
            reason,
        }),
    )
        .into_response()
}

pub fn ok<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// 201 with a `Location` header pointing at the new resource.
pub fn created<T: Serialize>(location: &str, data: T) -> Response {
    let mut response = (StatusCode::CREATED, Json(data)).into_response();
    if let Ok(value) = HeaderValue::from_str(location) {
        response.headers_mut().insert(header::LOCATION, value);
    }
    response
}

pub fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// Status only, empty body.
pub fn bare(status: StatusCode) -> Response {
    status.into_response()
}

/// Turn a handler panic into a 500 envelope carrying the panic message.
pub fn panic_response(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };
    tracing::error!(panic = %message, "handler panicked");
    error_envelope(StatusCode::INTERNAL_SERVER_ERROR, Value::String(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_message_becomes_reason() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = panic_response(Box::new(String::from("kaboom")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn created_sets_location() {
        let response = created("/thing/3", serde_json::json!({ "id": 3 }));
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::LOCATION], "/thing/3");
    }
}
