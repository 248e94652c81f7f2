use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use super::{ApiError, AppState};
use crate::error::FolioError;
use crate::model::{Item, ItemDraft};
use crate::store::ItemStore;

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// GET /api/items
pub async fn list_items<S: ItemStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let api = state.api.lock().await;
    let result = api.list_items()?;
    debug!(count = result.listed_items.len(), "listed items");
    Ok(Json(result.listed_items))
}

/// POST /api/items
pub async fn create_item<S: ItemStore>(
    State(state): State<AppState<S>>,
    Json(draft): Json<ItemDraft>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let mut api = state.api.lock().await;
    let mut result = api.create_item(draft)?;
    let item = result
        .affected_items
        .pop()
        .ok_or_else(|| ApiError::from(FolioError::Store("create returned no record".into())))?;
    info!(id = %item.id, title = %item.title, "item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// DELETE /api/items/{id}
///
/// Always reports success. An id that does not parse as a UUID cannot
/// name a stored record, so it gets the same treatment as a missing one.
pub async fn delete_item<S: ItemStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let Ok(id) = id.parse::<Uuid>() else {
        debug!(%id, "delete for unparseable id, nothing to do");
        return Ok(Json(DeleteResponse { success: true }));
    };

    let mut api = state.api.lock().await;
    let result = api.remove_item(&id)?;
    for message in &result.messages {
        debug!("{}", message.content);
    }
    Ok(Json(DeleteResponse { success: true }))
}
