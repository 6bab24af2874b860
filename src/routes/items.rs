use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::items::ItemPayload,
    error::AppResult,
    models::Item,
    services::item_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/warehouses/{warehouse_id}/items",
            get(list_items).post(create_item),
        )
        .route(
            "/warehouses/{warehouse_id}/items/{item_id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}

#[utoipa::path(
    get,
    path = "/warehouses/{warehouse_id}/items",
    params(
        ("warehouse_id" = i32, Path, description = "Warehouse ID")
    ),
    responses(
        (status = 200, description = "Items stored in the warehouse", body = Vec<Item>)
    ),
    tag = "Items"
)]
pub async fn list_items(
    State(state): State<AppState>,
    Path(warehouse_id): Path<i32>,
) -> AppResult<Json<Vec<Item>>> {
    let items = item_service::list_items(&state, warehouse_id).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/warehouses/{warehouse_id}/items/{item_id}",
    params(
        ("warehouse_id" = i32, Path, description = "Warehouse ID"),
        ("item_id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Get item", body = Item),
        (status = 404, description = "Item not found in this warehouse"),
    ),
    tag = "Items"
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path((warehouse_id, item_id)): Path<(i32, i32)>,
) -> AppResult<Json<Item>> {
    let item = item_service::get_item(&state, warehouse_id, item_id).await?;
    Ok(Json(item))
}

#[utoipa::path(
    post,
    path = "/warehouses/{warehouse_id}/items",
    params(
        ("warehouse_id" = i32, Path, description = "Warehouse ID")
    ),
    request_body = ItemPayload,
    responses(
        (status = 201, description = "Create item; quantity is the sum of its variants", body = Item),
        (status = 404, description = "Warehouse not found"),
    ),
    tag = "Items"
)]
pub async fn create_item(
    State(state): State<AppState>,
    Path(warehouse_id): Path<i32>,
    Json(payload): Json<ItemPayload>,
) -> AppResult<(StatusCode, Json<Item>)> {
    let item = item_service::create_item(&state, warehouse_id, payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    put,
    path = "/warehouses/{warehouse_id}/items/{item_id}",
    params(
        ("warehouse_id" = i32, Path, description = "Warehouse ID"),
        ("item_id" = i32, Path, description = "Item ID")
    ),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Updated item with its replacement variants", body = Item),
        (status = 404, description = "Item not found"),
    ),
    tag = "Items"
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path((_warehouse_id, item_id)): Path<(i32, i32)>,
    Json(payload): Json<ItemPayload>,
) -> AppResult<Json<Item>> {
    let item = item_service::update_item(&state, item_id, payload).await?;
    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/warehouses/{warehouse_id}/items/{item_id}",
    params(
        ("warehouse_id" = i32, Path, description = "Warehouse ID"),
        ("item_id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted", body = String, content_type = "text/plain")
    ),
    tag = "Items"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path((_warehouse_id, item_id)): Path<(i32, i32)>,
) -> AppResult<String> {
    item_service::delete_item(&state, item_id).await
}
