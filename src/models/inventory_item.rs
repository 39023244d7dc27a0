//! Inventory item entity model
//!
//! This module contains the SeaORM entity model for the inventory_items
//! table, the catalog rows managed by the inventory service.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use uuid::Uuid;

use super::supplier::Entity as Supplier;

/// Inventory item entity representing one catalog row
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "inventory_items")]
pub struct Model {
    /// Unique identifier for the item (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Stock keeping unit, unique across the catalog
    pub sku: String,

    /// Display name (required)
    pub name: String,

    /// Free-form description (optional)
    pub description: Option<String>,

    /// Units currently on hand. Negative values are not rejected here.
    pub quantity_on_hand: i32,

    /// Unit price as a fixed-point decimal
    pub unit_price: Decimal,

    /// Owning supplier (required, ON DELETE RESTRICT)
    pub supplier_id: Uuid,

    /// Timestamp when the item was created
    pub created_at: DateTimeWithTimeZone,

    /// Timestamp when the item was last updated
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Supplier",
        from = "Column::SupplierId",
        to = "super::supplier::Column::Id"
    )]
    Supplier,
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItem,
}

impl Related<Supplier> for Entity {
    fn to() -> RelationDef {
        Relation::Supplier.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
