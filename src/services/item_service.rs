use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, LoaderTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::{
    dto::items::{ItemPayload, VariantPayload},
    entity::{
        items::{ActiveModel as ItemActive, Column as ItemCol, Entity as Items, Model as ItemModel},
        variants::{
            ActiveModel as VariantActive, Column as VariantCol, Entity as Variants,
            Model as VariantModel,
        },
        warehouses::Entity as Warehouses,
    },
    error::{AppError, AppResult},
    models::{Item, Variant},
    state::AppState,
};

pub async fn list_items(state: &AppState, warehouse_id: i32) -> AppResult<Vec<Item>> {
    let items = Items::find_by_warehouse(warehouse_id)
        .order_by_asc(ItemCol::Id)
        .all(&state.orm)
        .await?;
    tracing::debug!(warehouse_id, count = items.len(), "listed items");
    load_items_with_variants(&state.orm, items).await
}

pub async fn get_item(state: &AppState, warehouse_id: i32, item_id: i32) -> AppResult<Item> {
    let item = Items::find_by_id(item_id)
        .filter(ItemCol::WarehouseId.eq(warehouse_id))
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::not_found("Item", item_id))?;

    let variants = Variants::find_by_item(item.id)
        .order_by_asc(VariantCol::Id)
        .all(&state.orm)
        .await?;
    Ok(item_from_entity(item, variants))
}

/// Creates an item under `warehouse_id` together with its variants.
///
/// The item quantity is the sum of the variant quantities. Nothing is written
/// when the warehouse does not exist or the quantities overflow.
pub async fn create_item(
    state: &AppState,
    warehouse_id: i32,
    payload: ItemPayload,
) -> AppResult<Item> {
    let quantity = total_quantity(&payload.variants)?;
    let txn = state.orm.begin().await?;

    let warehouse = Warehouses::find_by_id(warehouse_id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found("Warehouse", warehouse_id))?;

    let item = ItemActive {
        id: NotSet,
        warehouse_id: Set(warehouse.id),
        name: Set(payload.name),
        description: Set(payload.description),
        quantity: Set(quantity),
    }
    .insert(&txn)
    .await?;

    let variants = insert_variants(&txn, item.id, payload.variants).await?;
    txn.commit().await?;

    tracing::info!(
        warehouse_id,
        item_id = item.id,
        quantity = item.quantity,
        "item created"
    );
    Ok(item_from_entity(item, variants))
}

/// Overwrites name and description and replaces the whole variant set.
pub async fn update_item(state: &AppState, item_id: i32, payload: ItemPayload) -> AppResult<Item> {
    let quantity = total_quantity(&payload.variants)?;
    let txn = state.orm.begin().await?;

    let existing = Items::find_by_id(item_id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found("Item", item_id))?;

    // Old variants are orphaned by the replacement.
    Variants::delete_many()
        .filter(VariantCol::ItemId.eq(existing.id))
        .exec(&txn)
        .await?;

    let mut active: ItemActive = existing.into();
    active.name = Set(payload.name);
    active.description = Set(payload.description);
    active.quantity = Set(quantity);
    let item = active.update(&txn).await?;

    let variants = insert_variants(&txn, item.id, payload.variants).await?;
    txn.commit().await?;

    tracing::info!(item_id = item.id, quantity = item.quantity, "item updated");
    Ok(item_from_entity(item, variants))
}

/// Deletes the item and its variants. Missing items are not reported.
pub async fn delete_item(state: &AppState, item_id: i32) -> AppResult<String> {
    let txn = state.orm.begin().await?;

    Variants::delete_many()
        .filter(VariantCol::ItemId.eq(item_id))
        .exec(&txn)
        .await?;
    let result = Items::delete_by_id(item_id).exec(&txn).await?;

    txn.commit().await?;

    tracing::info!(item_id, rows = result.rows_affected, "item deleted");
    Ok("Item deleted".to_string())
}

/// Pairs each item with its variants using one batched lookup.
pub(crate) async fn load_items_with_variants<C>(
    db: &C,
    items: Vec<ItemModel>,
) -> AppResult<Vec<Item>>
where
    C: ConnectionTrait,
{
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let variants = items.load_many(Variants, db).await?;
    Ok(items
        .into_iter()
        .zip(variants)
        .map(|(item, variants)| item_from_entity(item, variants))
        .collect())
}

async fn insert_variants<C>(
    db: &C,
    item_id: i32,
    payload: Vec<VariantPayload>,
) -> AppResult<Vec<VariantModel>>
where
    C: ConnectionTrait,
{
    let mut variants = Vec::with_capacity(payload.len());
    for variant in payload {
        let model = VariantActive {
            id: NotSet,
            item_id: Set(item_id),
            size: Set(variant.size),
            color: Set(variant.color),
            quantity_variant: Set(variant.quantity_variant.unwrap_or(0)),
        }
        .insert(db)
        .await?;
        variants.push(model);
    }
    Ok(variants)
}

/// Missing variant quantities count as zero.
fn total_quantity(variants: &[VariantPayload]) -> AppResult<i64> {
    variants
        .iter()
        .map(|v| v.quantity_variant.unwrap_or(0))
        .try_fold(0_i64, |total, quantity| total.checked_add(quantity))
        .ok_or_else(|| AppError::BadRequest("variant quantities overflow the item total".into()))
}

fn item_from_entity(model: ItemModel, mut variants: Vec<VariantModel>) -> Item {
    variants.sort_by_key(|v| v.id);
    Item {
        item_id: model.id,
        warehouse_id: model.warehouse_id,
        name: model.name,
        description: model.description,
        quantity: model.quantity,
        variants: variants.into_iter().map(variant_from_entity).collect(),
    }
}

fn variant_from_entity(model: VariantModel) -> Variant {
    Variant {
        id: model.id,
        item_id: model.item_id,
        size: model.size,
        color: model.color,
        quantity_variant: model.quantity_variant,
    }
}
