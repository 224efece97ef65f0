//! List endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use super::items::ItemResponse;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::http::server::AppState;
use crate::models::{List, NewList};

/// Create or rename list request
#[derive(Debug, Deserialize)]
pub struct ListTitleRequest {
    pub title: String,
}

/// List response
///
/// `items` is only serialized for single-list fetches.
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub id: i64,
    pub title: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ItemResponse>>,
}

impl From<List> for ListResponse {
    fn from(l: List) -> Self {
        Self {
            id: l.id,
            title: l.title,
            created_at: l.created_at.to_rfc3339(),
            updated_at: l.updated_at.to_rfc3339(),
            items: l
                .items
                .map(|items| items.into_iter().map(ItemResponse::from).collect()),
        }
    }
}

/// GET /api/lists - list summaries without items
async fn list_lists(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ListResponse>>, ApiError> {
    let lists = state.lists.get_all_lists().await?;
    Ok(Json(
        lists
            .into_iter()
            .map(|l| ListResponse::from(l.summary()))
            .collect(),
    ))
}

/// GET /api/lists/{id} - get a list with its items
async fn get_list(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<ListResponse>, ApiError> {
    let mut list = state.lists.get_list(id).await?;
    // `items` is always present on a single-list fetch
    let items = list.items.take().unwrap_or_default();
    Ok(Json(ListResponse::from(list.with_items(items))))
}

/// POST /api/lists - create an empty list
async fn create_list(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<ListTitleRequest>,
) -> Result<(StatusCode, Json<ListResponse>), ApiError> {
    let list = state.lists.create_list(NewList::new(req.title)).await?;
    Ok((StatusCode::CREATED, Json(ListResponse::from(list))))
}

/// PUT /api/lists/{id} - rename a list
async fn update_list(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    JsonBody(req): JsonBody<ListTitleRequest>,
) -> Result<Json<ListResponse>, ApiError> {
    // 404 before any write
    state.lists.get_list(id).await?;
    let list = state.lists.update_title(id, &req.title).await?;
    Ok(Json(ListResponse::from(list.summary())))
}

/// DELETE /api/lists/{id} - delete a list and its items
async fn delete_list(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<StatusCode, ApiError> {
    state.lists.delete_list(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/lists", get(list_lists).post(create_list))
        .route(
            "/api/lists/{id}",
            get(get_list).put(update_list).delete(delete_list),
        )
}
