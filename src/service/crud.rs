//! CRUD execution for Things against SQLite.

use crate::error::AppError;
use crate::model::{Thing, ThingParams};
use crate::service::validation::{validate_new_id, validate_thing};
use sqlx::{SqliteConnection, SqlitePool};

const SELECT_ALL: &str = "SELECT id, name, status FROM things ORDER BY id";
const SELECT_ONE: &str = "SELECT id, name, status FROM things WHERE id = ?";

pub struct CrudService;

impl CrudService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Thing>, AppError> {
        tracing::debug!(sql = SELECT_ALL, "query");
        let rows = sqlx::query_as::<_, Thing>(SELECT_ALL).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<Thing>, AppError> {
        tracing::debug!(sql = SELECT_ONE, id, "query");
        let row = sqlx::query_as::<_, Thing>(SELECT_ONE)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Validate and insert; the store assigns the id.
    pub async fn create(pool: &SqlitePool, params: ThingParams) -> Result<Thing, AppError> {
        validate_thing(params.name.as_deref(), params.status.as_deref())?;
        let sql = "INSERT INTO things (name, status) VALUES (?, ?) RETURNING id, name, status";
        tracing::debug!(sql, params = ?params, "query");
        let row = sqlx::query_as::<_, Thing>(sql)
            .bind(params.name)
            .bind(params.status)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Find the Thing with `id` or start a new one with that id, overlay `params`,
    /// validate, and save. Nothing is written when validation fails.
    pub async fn upsert(pool: &SqlitePool, id: i64, params: ThingParams) -> Result<Thing, AppError> {
        let mut tx = pool.begin().await?;
        let existing = Self::read_tx(&mut tx, id).await?;
        let current = existing
            .as_ref()
            .map(|t| ThingParams {
                name: Some(t.name.clone()),
                status: t.status.clone(),
            })
            .unwrap_or_default();
        let merged = current.merge(params);
        validate_thing(merged.name.as_deref(), merged.status.as_deref())?;
        if existing.is_none() {
            validate_new_id(id)?;
        }

        let sql = if existing.is_some() {
            "UPDATE things SET name = ?, status = ? WHERE id = ? RETURNING id, name, status"
        } else {
            "INSERT INTO things (name, status, id) VALUES (?, ?, ?) RETURNING id, name, status"
        };
        tracing::debug!(sql, id, params = ?merged, "query (tx)");
        let row = sqlx::query_as::<_, Thing>(sql)
            .bind(merged.name)
            .bind(merged.status)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(row)
    }

    /// Set the status of an existing Thing. `None` when no row has `id`.
    pub async fn set_status(
        pool: &SqlitePool,
        id: i64,
        status: &str,
    ) -> Result<Option<Thing>, AppError> {
        let mut tx = pool.begin().await?;
        let Some(thing) = Self::read_tx(&mut tx, id).await? else {
            return Ok(None);
        };
        validate_thing(Some(&thing.name), Some(status))?;
        let sql = "UPDATE things SET status = ? WHERE id = ? RETURNING id, name, status";
        tracing::debug!(sql, id, status, "query (tx)");
        let row = sqlx::query_as::<_, Thing>(sql)
            .bind(status)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(Some(row))
    }

    /// Delete by id. Returns whether a row was removed.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let sql = "DELETE FROM things WHERE id = ?";
        tracing::debug!(sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn read_tx(tx: &mut SqliteConnection, id: i64) -> Result<Option<Thing>, AppError> {
        tracing::debug!(sql = SELECT_ONE, id, "query (tx)");
        let row = sqlx::query_as::<_, Thing>(SELECT_ONE)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        Ok(row)
    }
}
