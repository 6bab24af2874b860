use sea_orm_migration::prelude::*;

use super::m20250101_000003_create_items_table::Items;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Variants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Variants::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Variants::ItemId).integer().not_null())
                    .col(ColumnDef::new(Variants::Size).string().null())
                    .col(ColumnDef::new(Variants::Color).string().null())
                    .col(
                        ColumnDef::new(Variants::QuantityVariant)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_variants_item_id")
                            .from(Variants::Table, Variants::ItemId)
                            .to(Items::Table, Items::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_variants_item_id")
                    .table(Variants::Table)
                    .col(Variants::ItemId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Variants::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Variants {
    Table,
    Id,
    ItemId,
    Size,
    Color,
    QuantityVariant,
}
