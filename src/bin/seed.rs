use warehouse_inventory_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::{
        items::{ItemPayload, VariantPayload},
        users::UserPayload,
        warehouses::WarehousePayload,
    },
    services::{item_service, user_service, warehouse_service},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;
    let state = AppState { orm };

    let user = user_service::create_user(
        &state,
        UserPayload {
            name: "Warehouse Admin".into(),
        },
    )
    .await?;
    println!("Seeded user {} ({})", user.name, user.id);

    let warehouses = [
        ("Central Depot", "Springfield", 5000),
        ("North Annex", "Shelbyville", 1200),
    ];
    for (name, location, capacity) in warehouses {
        let warehouse = warehouse_service::create_warehouse(
            &state,
            WarehousePayload {
                name: name.into(),
                location: location.into(),
                maximum_capacity: capacity,
            },
        )
        .await?;

        let item = item_service::create_item(
            &state,
            warehouse.warehouse_id,
            ItemPayload {
                name: "Crew Neck Shirt".into(),
                description: Some("Cotton, assorted colors".into()),
                variants: vec![
                    seed_variant("M", "Red", 40),
                    seed_variant("L", "Blue", 25),
                    seed_variant("XL", "Black", 10),
                ],
            },
        )
        .await?;
        println!(
            "Seeded warehouse {} with item {} (quantity {})",
            warehouse.name, item.name, item.quantity
        );
    }

    println!("Seed completed");
    Ok(())
}

fn seed_variant(size: &str, color: &str, quantity: i64) -> VariantPayload {
    VariantPayload {
        size: Some(size.into()),
        color: Some(color.into()),
        quantity_variant: Some(quantity),
    }
}
