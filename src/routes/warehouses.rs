use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::warehouses::WarehousePayload,
    error::AppResult,
    models::Warehouse,
    services::warehouse_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/warehouses", get(list_warehouses).post(create_warehouse))
        .route(
            "/warehouses/{warehouse_id}",
            get(get_warehouse)
                .put(update_warehouse)
                .delete(delete_warehouse),
        )
}

#[utoipa::path(
    get,
    path = "/warehouses",
    responses(
        (status = 200, description = "List warehouses with their items", body = Vec<Warehouse>)
    ),
    tag = "Warehouses"
)]
pub async fn list_warehouses(State(state): State<AppState>) -> AppResult<Json<Vec<Warehouse>>> {
    let warehouses = warehouse_service::list_warehouses(&state).await?;
    Ok(Json(warehouses))
}

#[utoipa::path(
    get,
    path = "/warehouses/{warehouse_id}",
    params(
        ("warehouse_id" = i32, Path, description = "Warehouse ID")
    ),
    responses(
        (status = 200, description = "Get warehouse", body = Warehouse),
        (status = 404, description = "Warehouse not found"),
    ),
    tag = "Warehouses"
)]
pub async fn get_warehouse(
    State(state): State<AppState>,
    Path(warehouse_id): Path<i32>,
) -> AppResult<Json<Warehouse>> {
    let warehouse = warehouse_service::get_warehouse(&state, warehouse_id).await?;
    Ok(Json(warehouse))
}

#[utoipa::path(
    post,
    path = "/warehouses",
    request_body = WarehousePayload,
    responses(
        (status = 201, description = "Create warehouse", body = Warehouse)
    ),
    tag = "Warehouses"
)]
pub async fn create_warehouse(
    State(state): State<AppState>,
    Json(payload): Json<WarehousePayload>,
) -> AppResult<(StatusCode, Json<Warehouse>)> {
    let warehouse = warehouse_service::create_warehouse(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(warehouse)))
}

#[utoipa::path(
    put,
    path = "/warehouses/{warehouse_id}",
    params(
        ("warehouse_id" = i32, Path, description = "Warehouse ID")
    ),
    request_body = WarehousePayload,
    responses(
        (status = 200, description = "Updated warehouse", body = Warehouse),
        (status = 404, description = "Warehouse not found"),
    ),
    tag = "Warehouses"
)]
pub async fn update_warehouse(
    State(state): State<AppState>,
    Path(warehouse_id): Path<i32>,
    Json(payload): Json<WarehousePayload>,
) -> AppResult<Json<Warehouse>> {
    let warehouse = warehouse_service::update_warehouse(&state, warehouse_id, payload).await?;
    Ok(Json(warehouse))
}

#[utoipa::path(
    delete,
    path = "/warehouses/{warehouse_id}",
    params(
        ("warehouse_id" = i32, Path, description = "Warehouse ID")
    ),
    responses(
        (status = 200, description = "Deletion outcome, also when the warehouse did not exist", body = String, content_type = "text/plain")
    ),
    tag = "Warehouses"
)]
pub async fn delete_warehouse(
    State(state): State<AppState>,
    Path(warehouse_id): Path<i32>,
) -> AppResult<String> {
    warehouse_service::delete_warehouse(&state, warehouse_id).await
}
