//! Inventory store gateway
//!
//! CRUD plus filtered query over inventory rows and their supplier relation.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ServiceError;
use crate::models::inventory_item::{self, Entity as InventoryItem};
use crate::models::supplier;

/// Query filter for [`InventoryGateway::query_items`].
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    /// Substring matched case-insensitively against name and SKU. `None`
    /// selects everything.
    pub term: Option<String>,
}

/// An inventory row together with its eagerly-resolved supplier.
pub type ItemWithSupplier = (inventory_item::Model, Option<supplier::Model>);

/// Persistence-facing CRUD over inventory rows.
#[async_trait]
pub trait InventoryGateway: Send + Sync {
    /// Returns matching items sorted ascending by name, each with its
    /// supplier resolved.
    async fn query_items(&self, filter: ItemFilter) -> Result<Vec<ItemWithSupplier>, ServiceError>;

    /// Looks up a single item by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<inventory_item::Model>, ServiceError>;

    /// Persists a new row and returns it as stored.
    async fn insert(
        &self,
        item: inventory_item::Model,
    ) -> Result<inventory_item::Model, ServiceError>;

    /// Overwrites the row with the given id. Returns `None` when the row
    /// vanished between lookup and write.
    async fn update(
        &self,
        item: inventory_item::Model,
    ) -> Result<Option<inventory_item::Model>, ServiceError>;

    /// Hard-deletes a row. Returns `false` when nothing matched.
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// SeaORM-backed implementation of [`InventoryGateway`].
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    /// Database connection pool
    pub db: Arc<DatabaseConnection>,
}

impl InventoryRepository {
    /// Creates a new InventoryRepository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_active(item: inventory_item::Model) -> inventory_item::ActiveModel {
        inventory_item::ActiveModel {
            id: Set(item.id),
            sku: Set(item.sku),
            name: Set(item.name),
            description: Set(item.description),
            quantity_on_hand: Set(item.quantity_on_hand),
            unit_price: Set(item.unit_price),
            supplier_id: Set(item.supplier_id),
            created_at: Set(item.created_at),
            updated_at: Set(item.updated_at),
        }
    }
}

#[async_trait]
impl InventoryGateway for InventoryRepository {
    async fn query_items(&self, filter: ItemFilter) -> Result<Vec<ItemWithSupplier>, ServiceError> {
        let mut query = InventoryItem::find()
            .find_also_related(supplier::Entity)
            .order_by_asc(inventory_item::Column::Name);

        if let Some(term) = filter.term {
            // lower() on both sides keeps the substring match
            // case-insensitive regardless of backend collation. Columns are
            // table-qualified because the supplier join is in play.
            let pattern = format!("%{}%", term.to_lowercase());
            let name = (InventoryItem, inventory_item::Column::Name);
            let sku = (InventoryItem, inventory_item::Column::Sku);
            query = query.filter(
                Condition::any()
                    .add(Expr::expr(Func::lower(Expr::col(name))).like(pattern.clone()))
                    .add(Expr::expr(Func::lower(Expr::col(sku))).like(pattern)),
            );
        }

        let items = query
            .all(&*self.db)
            .await
            .map_err(ServiceError::from_db)?;

        Ok(items)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<inventory_item::Model>, ServiceError> {
        let item = InventoryItem::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(ServiceError::from_db)?;

        Ok(item)
    }

    async fn insert(
        &self,
        item: inventory_item::Model,
    ) -> Result<inventory_item::Model, ServiceError> {
        let id = item.id;

        InventoryItem::insert(Self::to_active(item))
            .exec(&*self.db)
            .await
            .map_err(ServiceError::from_db)?;

        // Re-read so the caller sees any store-assigned defaults.
        let stored = self.find_by_id(id).await?;
        stored.ok_or_else(|| {
            ServiceError::Database(DbErr::RecordNotFound(format!(
                "inventory item '{}' not persisted",
                id
            )))
        })
    }

    async fn update(
        &self,
        item: inventory_item::Model,
    ) -> Result<Option<inventory_item::Model>, ServiceError> {
        match Self::to_active(item).update(&*self.db).await {
            Ok(updated) => Ok(Some(updated)),
            // The row disappeared after the service looked it up.
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(ServiceError::from_db(err)),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let result = InventoryItem::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(ServiceError::from_db)?;

        Ok(result.rows_affected > 0)
    }
}
