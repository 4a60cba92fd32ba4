//! Operational routes: liveness, schema readiness, build version.

use crate::error::AppError;
use crate::response::ok;
use crate::state::AppState;
use crate::store::{THINGS_TABLE, THING_COLUMNS};
use axum::{extract::State, response::Response, routing::get, Router};
use serde::Serialize;
use serde_json::json;

/// Readiness report: the Thing table and the columns it currently has.
#[derive(Debug, Serialize)]
pub struct Readiness {
    pub status: &'static str,
    pub table: &'static str,
    pub columns: Vec<String>,
}

async fn live() -> Response {
    ok(json!({ "status": "ok" }))
}

/// 200 once `things` carries every column a Thing needs; otherwise a 503 envelope.
async fn ready(State(state): State<AppState>) -> Result<Response, AppError> {
    let columns = state.store.columns().await.map_err(|e| {
        tracing::warn!(error = %e, "store not ready");
        AppError::Unavailable(format!("{} table unavailable", THINGS_TABLE))
    })?;
    let missing: Vec<&str> = THING_COLUMNS
        .iter()
        .copied()
        .filter(|c| !columns.iter().any(|have| have == c))
        .collect();
    if !missing.is_empty() {
        return Err(AppError::Unavailable(format!(
            "{} table missing columns: {}",
            THINGS_TABLE,
            missing.join(", ")
        )));
    }
    Ok(ok(Readiness {
        status: "ok",
        table: THINGS_TABLE,
        columns,
    }))
}

async fn version() -> Response {
    ok(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /health, GET /ready, GET /version.
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/health", get(live))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
