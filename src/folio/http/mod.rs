//! # HTTP API Layer
//!
//! A thin axum surface over [`FolioApi`]. Handlers map command outcomes
//! to status codes and never contain business logic of their own:
//!
//! - `GET /api/items` — 200, JSON array, newest first
//! - `POST /api/items` — 201 with the created item, or 400 `{message}`
//! - `DELETE /api/items/{id}` — 200 `{success:true}`, even for a
//!   missing or malformed id
//!
//! Each request takes the store lock for the duration of one store
//! operation; there are no cross-request transactions.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::api::FolioApi;
use crate::error::FolioError;
use crate::store::ItemStore;

pub mod handlers;

/// Shared application dependencies.
pub struct AppState<S: ItemStore> {
    pub api: Arc<Mutex<FolioApi<S>>>,
}

impl<S: ItemStore> AppState<S> {
    pub fn new(api: FolioApi<S>) -> Self {
        Self {
            api: Arc::new(Mutex::new(api)),
        }
    }
}

impl<S: ItemStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

pub fn router<S: ItemStore + Send + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route(
            "/api/items",
            get(handlers::list_items::<S>).post(handlers::create_item::<S>),
        )
        .route("/api/items/{id}", delete(handlers::delete_item::<S>))
        .with_state(state)
}

/// Error body for every non-2xx response: `{"message": "..."}`.
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub message: String,
}

impl From<FolioError> for ApiError {
    fn from(err: FolioError) -> Self {
        let status = if err.is_validation() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(self)).into_response()
    }
}
