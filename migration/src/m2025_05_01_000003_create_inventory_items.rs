//! Migration to create the inventory_items table.
//!
//! Each item belongs to exactly one supplier; a supplier referenced by any
//! item cannot be deleted (ON DELETE RESTRICT).

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InventoryItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InventoryItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(InventoryItems::Sku)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InventoryItems::Name)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(InventoryItems::Description).text().null())
                    .col(
                        ColumnDef::new(InventoryItems::QuantityOnHand)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(InventoryItems::UnitPrice)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InventoryItems::SupplierId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InventoryItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(InventoryItems::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_items_supplier_id")
                            .from(InventoryItems::Table, InventoryItems::SupplierId)
                            .to(Suppliers::Table, Suppliers::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_inventory_items_sku")
                    .table(InventoryItems::Table)
                    .col(InventoryItems::Sku)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_inventory_items_supplier_id")
                    .table(InventoryItems::Table)
                    .col(InventoryItems::SupplierId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_inventory_items_sku").to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_inventory_items_supplier_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(InventoryItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum InventoryItems {
    Table,
    Id,
    Sku,
    Name,
    Description,
    QuantityOnHand,
    UnitPrice,
    SupplierId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Suppliers {
    Table,
    Id,
}
