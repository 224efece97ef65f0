//! Item endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::http::server::AppState;
use crate::models::{Item, ItemDate, NewItem};

/// Create item request
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub title: String,
    pub content: String,
    pub item_date: String,
    pub list_id: i64,
}

/// Update item request
///
/// There is no `list_id`: an item stays in the list it was created in.
#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub title: String,
    pub content: String,
    pub item_date: String,
}

/// Item response
#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: i64,
    pub title: String,
    pub item_date: NaiveDate,
    pub content: String,
    pub list_id: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Item> for ItemResponse {
    fn from(i: Item) -> Self {
        Self {
            id: i.id,
            title: i.title,
            item_date: i.item_date,
            content: i.content,
            list_id: i.list_id,
            created_at: i.created_at.to_rfc3339(),
            updated_at: i.updated_at.to_rfc3339(),
        }
    }
}

/// GET /api/items - list every item
async fn list_items(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let items = state.items.get_all().await?;
    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// GET /api/items/{id} - get a single item
async fn get_item(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = state.items.get_by_id(id).await?;
    Ok(Json(ItemResponse::from(item)))
}

/// POST /api/items - create an item in an existing list
async fn create_item(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateItemRequest>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let item_date = ItemDate::parse(&req.item_date)?;
    let item = state
        .items
        .create_item(NewItem::new(
            req.title,
            item_date.into_inner(),
            req.content,
            req.list_id,
        ))
        .await?;

    Ok((StatusCode::CREATED, Json(ItemResponse::from(item))))
}

/// PUT /api/items/{id} - replace title, date and content
async fn update_item(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    JsonBody(req): JsonBody<UpdateItemRequest>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item_date = ItemDate::parse(&req.item_date)?;

    // 404 before any write
    state.items.get_by_id(id).await?;

    state
        .items
        .update_item(id, &req.title, item_date.into_inner(), &req.content)
        .await?;

    let updated = state.items.get_by_id(id).await?;
    Ok(Json(ItemResponse::from(updated)))
}

/// DELETE /api/items/{id} - delete a single item
async fn delete_item(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<StatusCode, ApiError> {
    state.items.delete_item_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/items", get(list_items).post(create_item))
        .route(
            "/api/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}
