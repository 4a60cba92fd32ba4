//! Router assembly.

pub mod common;
pub mod thing;

pub use common::common_routes_with_ready;
pub use thing::thing_routes;

use crate::handlers::unmatched;
use crate::response::panic_response;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

/// Largest request body accepted, in bytes. Larger bodies get a 413 envelope.
pub const BODY_LIMIT: usize = 1024 * 1024;

/// The complete application: Thing routes, operational routes, fallbacks and middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(thing_routes(state))
        .fallback(unmatched)
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
}
