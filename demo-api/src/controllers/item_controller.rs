use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::models::{CreateItemRequest, Item};
use crate::services::ItemService;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/items", get(list).post(create))
        .route("/items/", get(list).post(create))
        .route("/items/{id}", get(get_by_id))
}

pub async fn list(State(items): State<ItemService>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = items.list().await?;
    Ok(Json(items))
}

/// A non-integer id is a validation error (422), not a 400.
pub async fn get_by_id(
    State(items): State<ItemService>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Item>, ApiError> {
    let Path(id) = id?;
    let item = items.get_by_id(id).await?;
    Ok(Json(item))
}

pub async fn create(
    State(items): State<ItemService>,
    JsonBody(body): JsonBody<CreateItemRequest>,
) -> Result<Json<Item>, ApiError> {
    let item = items.create(body).await?;
    Ok(Json(item))
}
