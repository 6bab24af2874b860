use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{items::{ItemPayload, VariantPayload}, users::UserPayload, warehouses::WarehousePayload},
    models::{Item, User, Variant, Warehouse},
    response::ApiResponse,
    routes::{health, items, users, warehouses},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        warehouses::list_warehouses,
        warehouses::get_warehouse,
        warehouses::create_warehouse,
        warehouses::update_warehouse,
        warehouses::delete_warehouse,
        items::list_items,
        items::get_item,
        items::create_item,
        items::update_item,
        items::delete_item
    ),
    components(
        schemas(
            User,
            Warehouse,
            Item,
            Variant,
            UserPayload,
            WarehousePayload,
            ItemPayload,
            VariantPayload,
            health::HealthData,
            ApiResponse<health::HealthData>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Users", description = "User endpoints"),
        (name = "Warehouses", description = "Warehouse endpoints"),
        (name = "Items", description = "Item and variant endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
