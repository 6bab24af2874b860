use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, LoaderTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

use crate::{
    dto::warehouses::WarehousePayload,
    entity::{
        items::{Column as ItemCol, Entity as Items},
        variants::{Column as VariantCol, Entity as Variants},
        warehouses::{ActiveModel, Column, Entity as Warehouses, Model as WarehouseModel},
    },
    error::{AppError, AppResult},
    models::{Item, Warehouse},
    services::item_service::load_items_with_variants,
    state::AppState,
};

pub async fn list_warehouses(state: &AppState) -> AppResult<Vec<Warehouse>> {
    let warehouses = Warehouses::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?;

    if warehouses.is_empty() {
        return Ok(Vec::new());
    }

    // One query for every warehouse's items, one more for all of their variants.
    let items_per_warehouse = warehouses.load_many(Items, &state.orm).await?;
    let counts: Vec<usize> = items_per_warehouse.iter().map(Vec::len).collect();
    let mut items = load_items_with_variants(
        &state.orm,
        items_per_warehouse.into_iter().flatten().collect(),
    )
    .await?
    .into_iter();

    Ok(warehouses
        .into_iter()
        .zip(counts)
        .map(|(warehouse, count)| {
            let mut own: Vec<Item> = items.by_ref().take(count).collect();
            own.sort_by_key(|item| item.item_id);
            warehouse_from_entity(warehouse, own)
        })
        .collect())
}

pub async fn get_warehouse(state: &AppState, id: i32) -> AppResult<Warehouse> {
    let warehouse = Warehouses::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::not_found("Warehouse", id))?;

    let items = items_of(state, warehouse.id).await?;
    Ok(warehouse_from_entity(warehouse, items))
}

pub async fn create_warehouse(state: &AppState, payload: WarehousePayload) -> AppResult<Warehouse> {
    let warehouse = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        location: Set(payload.location),
        maximum_capacity: Set(payload.maximum_capacity),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(warehouse_id = warehouse.id, "warehouse created");
    Ok(warehouse_from_entity(warehouse, Vec::new()))
}

pub async fn update_warehouse(
    state: &AppState,
    id: i32,
    payload: WarehousePayload,
) -> AppResult<Warehouse> {
    let existing = Warehouses::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::not_found("Warehouse", id))?;

    let mut active: ActiveModel = existing.into();
    active.name = Set(payload.name);
    active.location = Set(payload.location);
    active.maximum_capacity = Set(payload.maximum_capacity);
    let warehouse = active.update(&state.orm).await?;

    let items = items_of(state, warehouse.id).await?;
    Ok(warehouse_from_entity(warehouse, items))
}

/// Removes the warehouse with every item it holds and every variant of those
/// items. A missing warehouse yields a message instead of an error.
pub async fn delete_warehouse(state: &AppState, id: i32) -> AppResult<String> {
    let exists = Warehouses::find_by_id(id).count(&state.orm).await? > 0;
    if !exists {
        return Ok(format!("Warehouse not found with id {id}"));
    }

    let txn = state.orm.begin().await?;

    let item_ids: Vec<i32> = Items::find_by_warehouse(id)
        .select_only()
        .column(ItemCol::Id)
        .into_tuple()
        .all(&txn)
        .await?;

    if !item_ids.is_empty() {
        Variants::delete_many()
            .filter(VariantCol::ItemId.is_in(item_ids.clone()))
            .exec(&txn)
            .await?;
        Items::delete_many()
            .filter(ItemCol::WarehouseId.eq(id))
            .exec(&txn)
            .await?;
    }
    Warehouses::delete_by_id(id).exec(&txn).await?;

    txn.commit().await?;

    tracing::info!(warehouse_id = id, items = item_ids.len(), "warehouse deleted");
    Ok(format!("Warehouse deleted with id {id}"))
}

async fn items_of(state: &AppState, warehouse_id: i32) -> AppResult<Vec<Item>> {
    let items = Items::find_by_warehouse(warehouse_id)
        .order_by_asc(ItemCol::Id)
        .all(&state.orm)
        .await?;
    load_items_with_variants(&state.orm, items).await
}

fn warehouse_from_entity(model: WarehouseModel, items: Vec<Item>) -> Warehouse {
    Warehouse {
        warehouse_id: model.id,
        name: model.name,
        location: model.location,
        maximum_capacity: model.maximum_capacity,
        items,
    }
}
