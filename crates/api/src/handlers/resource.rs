//! Generic handlers for list/detail REST resources.
//!
//! Every entity is served by the same handlers, instantiated per
//! [`Resource`] implementation in `routes`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gestao_core::error::CoreError;
use gestao_core::types::DbId;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::services::{ChildResource, Resource};
use crate::state::AppState;

/// Key for errors that belong to the body as a whole rather than one field.
const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Decode a request body into a resource input.
///
/// Bodies that are not JSON are a plain 400. A JSON body of the wrong shape
/// (not an object, or a field of the wrong type) is a field-keyed 400 under
/// `non_field_errors`; missing fields are reported by the input's own
/// validation.
fn json_body<T: DeserializeOwned>(payload: Result<Json<Value>, JsonRejection>) -> AppResult<T> {
    let Json(value) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    serde_json::from_value(value)
        .map_err(|err| CoreError::invalid_field(NON_FIELD_ERRORS, err.to_string()).into())
}

/// Resolve a detail route id. Anything that is not an integer cannot name a
/// row, so it is reported as not found.
fn detail_id<R: Resource>(raw: &str) -> AppResult<DbId> {
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("{} with id {raw} not found", R::ENTITY)))
}

/// GET /{resource}/
pub async fn list<R: Resource>(State(state): State<AppState>) -> AppResult<Json<Vec<R::Record>>> {
    let records = R::list(&state.pool).await?;
    Ok(Json(records))
}

/// POST /{resource}/
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<R::Record>)> {
    let input = json_body(payload)?;
    let record = R::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /{resource}/{id}/
pub async fn get_by_id<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<R::Record>> {
    let id = detail_id::<R>(&id)?;
    let record = R::get(&state.pool, id).await?;
    Ok(Json(record))
}

/// PUT /{resource}/{id}/
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<R::Record>> {
    let id = detail_id::<R>(&id)?;
    let input = json_body(payload)?;
    let record = R::update(&state.pool, id, input).await?;
    Ok(Json(record))
}

/// PATCH /{resource}/{id}/
pub async fn partial_update<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<R::Record>> {
    let id = detail_id::<R>(&id)?;
    let patch = json_body(payload)?;
    let record = R::partial_update(&state.pool, id, patch).await?;
    Ok(Json(record))
}

/// DELETE /{resource}/{id}/
pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = detail_id::<R>(&id)?;
    if R::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(crate::services::not_found(R::ENTITY, id))
    }
}

/// GET /{parent}/{id}/{resource}/
///
/// A parent id that is not an integer names no parent, so the list is empty.
pub async fn list_by_parent<R: ChildResource>(
    State(state): State<AppState>,
    Path(parent_id): Path<String>,
) -> AppResult<Json<Vec<R::Record>>> {
    let Ok(parent_id) = parent_id.parse::<DbId>() else {
        return Ok(Json(Vec::new()));
    };
    let records = R::list_by_parent(&state.pool, parent_id).await?;
    Ok(Json(records))
}
