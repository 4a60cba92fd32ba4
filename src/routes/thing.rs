//! Thing routes. Unsupported methods on known paths share the global fallback.

use crate::handlers::{create, delete as delete_handler, list, read, set_status, unmatched, upsert};
use crate::state::AppState;
use axum::{
    routing::{delete, get, put},
    Router,
};

pub fn thing_routes(state: AppState) -> Router {
    Router::new()
        .route("/thing", get(list).post(create).fallback(unmatched))
        .route("/thing/", get(list).post(create).fallback(unmatched))
        .route(
            "/thing/:id",
            get(read).put(upsert).delete(delete_handler).fallback(unmatched),
        )
        .route("/thing/:id/", delete(delete_handler).fallback(unmatched))
        .route(
            "/thing/:id/status/:status",
            put(set_status).post(set_status).fallback(unmatched),
        )
        .with_state(state)
}
