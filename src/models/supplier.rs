//! Supplier entity model

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use uuid::Uuid;

/// Supplier entity; owns a collection of inventory items. The schema rejects
/// deletion of a supplier that is still referenced by an item.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "suppliers")]
pub struct Model {
    /// Unique identifier for the supplier (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Display name (required)
    pub name: String,

    /// Contact email (optional)
    pub email: Option<String>,

    /// Contact phone (optional)
    pub phone: Option<String>,

    /// Postal address (optional)
    pub address: Option<String>,

    /// Timestamp when the supplier was created
    pub created_at: DateTimeWithTimeZone,

    /// Timestamp when the supplier was last updated
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::inventory_item::Entity")]
    InventoryItem,
}

impl Related<super::inventory_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InventoryItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
