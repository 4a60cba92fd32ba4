//! Thing handlers: list, read, create, upsert, set status, delete.
//! Malformed ids are reported exactly like absent ones (404).

use crate::error::AppError;
use crate::extractors::AcceptedParams;
use crate::response::{created, no_content, ok};
use crate::service::{valid_id, CrudService};
use crate::state::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Response,
};

/// Ids are positive; zero, overflow and non-digit text name nothing.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    if !valid_id(id_str) {
        return Err(AppError::NotFound);
    }
    match id_str.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::NotFound),
    }
}

/// Undecodable path segments are treated like any other unusable id.
fn path_segments<T>(path: Result<Path<T>, PathRejection>) -> Result<T, AppError> {
    path.map(|Path(segments)| segments).map_err(|e| {
        tracing::debug!(error = %e, "rejected path");
        AppError::NotFound
    })
}

/// GET /thing
pub async fn list(State(state): State<AppState>) -> Result<Response, AppError> {
    match CrudService::list(state.store.pool()).await {
        Ok(things) => Ok(ok(things)),
        Err(e) => {
            tracing::error!(error = %e, "thing collection unavailable");
            Err(AppError::NotFound)
        }
    }
}

/// GET /thing/:id
pub async fn read(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let id = parse_id(&path_segments(path)?)?;
    let thing = CrudService::read(state.store.pool(), id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ok(thing))
}

/// POST /thing
pub async fn create(
    State(state): State<AppState>,
    AcceptedParams(params): AcceptedParams,
) -> Result<Response, AppError> {
    let thing = CrudService::create(state.store.pool(), params).await?;
    tracing::info!(id = thing.id, "created thing");
    Ok(created(&thing.location(), thing))
}

/// PUT /thing/:id: update, or create with this id.
pub async fn upsert(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    params: Result<AcceptedParams, AppError>,
) -> Result<Response, AppError> {
    let id = parse_id(&path_segments(path)?)?;
    let AcceptedParams(params) = params?;
    let thing = CrudService::upsert(state.store.pool(), id, params).await?;
    Ok(ok(thing))
}

/// PUT or POST /thing/:id/status/:status
pub async fn set_status(
    State(state): State<AppState>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Response, AppError> {
    let (id_str, status) = path_segments(path)?;
    let id = parse_id(&id_str)?;
    let thing = CrudService::set_status(state.store.pool(), id, &status)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ok(thing))
}

/// DELETE /thing/:id: 204 once, 404 for every repeat.
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let id = parse_id(&path_segments(path)?)?;
    if !CrudService::delete(state.store.pool(), id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!(id, "deleted thing");
    Ok(no_content())
}
