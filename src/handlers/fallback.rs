//! Fallbacks for requests no Thing route accepts.

use crate::error::AppError;
use crate::response::bare;
use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};

/// GET, HEAD, PUT, POST and DELETE on an unknown path or method get an empty 404;
/// other methods fall through to the JSON not-found envelope.
pub async fn unmatched(method: Method) -> Response {
    let bare_methods = [Method::GET, Method::HEAD, Method::PUT, Method::POST, Method::DELETE];
    if bare_methods.contains(&method) {
        bare(StatusCode::NOT_FOUND)
    } else {
        AppError::NotFound.into_response()
    }
}
