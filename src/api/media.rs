//! Media record API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{check_scalar_fields, Document, Fields, Record};
use crate::AppState;

/// GET /api/media - Get every category.
pub async fn get_all_media(State(state): State<AppState>) -> ApiResult<Document> {
    success(state.service.list_all().await)
}

/// POST /api/media/{category} - Add a record.
pub async fn add_media_item(
    State(state): State<AppState>,
    Path(category): Path<String>,
    body: Result<Json<Fields>, JsonRejection>,
) -> ApiResult<Record> {
    let fields = body_fields(body)?;
    let record = state.service.add(&category, fields).await?;
    success(record)
}

/// PUT /api/media/{category}/{id} - Shallow-merge a patch into a record.
pub async fn update_media_item(
    State(state): State<AppState>,
    Path((category, id)): Path<(String, String)>,
    body: Result<Json<Fields>, JsonRejection>,
) -> ApiResult<Record> {
    let patch = body_fields(body)?;
    let record = state.service.update(&category, &id, patch).await?;
    success(record)
}

/// DELETE /api/media/{category}/{id} - Remove a record.
pub async fn remove_media_item(
    State(state): State<AppState>,
    Path((category, id)): Path<(String, String)>,
) -> ApiResult<bool> {
    state.service.remove(&category, &id).await?;
    success(true)
}

fn body_fields(body: Result<Json<Fields>, JsonRejection>) -> Result<Fields, AppError> {
    let Json(fields) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    check_scalar_fields(&fields).map_err(AppError::BadRequest)?;
    Ok(fields)
}
