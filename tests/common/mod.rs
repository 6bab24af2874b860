#![allow(dead_code)]

use warehouse_inventory_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::{
        items::{ItemPayload, VariantPayload},
        warehouses::WarehousePayload,
    },
    state::AppState,
};

/// Fresh application state backed by its own in-memory SQLite database.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let orm = create_orm_conn("sqlite::memory:").await?;
    run_migrations(&orm).await?;
    Ok(AppState { orm })
}

pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: "sqlite::memory:".into(),
        host: "127.0.0.1".into(),
        port: 0,
        cors_origin: "http://localhost:3000".into(),
    }
}

pub fn warehouse_payload(name: &str) -> WarehousePayload {
    WarehousePayload {
        name: name.into(),
        location: "X".into(),
        maximum_capacity: 100,
    }
}

pub fn variant(size: &str, color: &str, quantity: Option<i64>) -> VariantPayload {
    VariantPayload {
        size: Some(size.into()),
        color: Some(color.into()),
        quantity_variant: quantity,
    }
}

pub fn item_payload(name: &str, variants: Vec<VariantPayload>) -> ItemPayload {
    ItemPayload {
        name: name.into(),
        description: Some(format!("{name} description")),
        variants,
    }
}
