use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub warehouse_id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Sum of the `quantity_variant` of every variant of this item.
    pub quantity: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::warehouses::Entity",
        from = "Column::WarehouseId",
        to = "super::warehouses::Column::Id",
        on_delete = "Cascade"
    )]
    Warehouses,
    #[sea_orm(has_many = "super::variants::Entity")]
    Variants,
}

impl Related<super::warehouses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Warehouses.def()
    }
}

impl Related<super::variants::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Variants.def()
    }
}

impl Entity {
    pub fn find_by_warehouse(warehouse_id: i32) -> Select<Entity> {
        Self::find().filter(Column::WarehouseId.eq(warehouse_id))
    }
}

impl ActiveModelBehavior for ActiveModel {}
