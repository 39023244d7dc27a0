//! Order entity model
//!
//! Orders carry no service behavior in this codebase; the entity exists for
//! the referential rules its line items impose.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Unique identifier for the order (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// When the order was placed
    pub order_date: DateTimeWithTimeZone,

    /// Customer display name (optional)
    pub customer_name: Option<String>,

    /// Timestamp when the order was created
    pub created_at: DateTimeWithTimeZone,

    /// Timestamp when the order was last updated
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItem,
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
