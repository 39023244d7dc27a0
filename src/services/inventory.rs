//! Inventory service
//!
//! Orchestrates search, create, update and delete against the inventory
//! store gateway, enforcing the field-copy and timestamp rules.

use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ServiceError;
use crate::gateways::{InventoryGateway, ItemFilter, inventory::ItemWithSupplier};
use crate::models::inventory_item;

/// Input for [`InventoryService::add_item`].
#[derive(Debug, Clone)]
pub struct NewItem {
    /// Optional caller-supplied id; a fresh one is assigned when absent.
    pub id: Option<Uuid>,
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub quantity_on_hand: i32,
    pub unit_price: Decimal,
    pub supplier_id: Uuid,
}

/// Input for [`InventoryService::update_item`]: the target id plus the full
/// set of mutable fields, all of which are overwritten unconditionally.
#[derive(Debug, Clone)]
pub struct ItemChanges {
    pub id: Uuid,
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub quantity_on_hand: i32,
    pub unit_price: Decimal,
    pub supplier_id: Uuid,
}

/// Catalog operations over the inventory store.
pub struct InventoryService {
    store: Arc<dyn InventoryGateway>,
}

impl InventoryService {
    pub fn new(store: Arc<dyn InventoryGateway>) -> Self {
        Self { store }
    }

    /// Returns catalog items sorted ascending by name, each with its
    /// supplier resolved.
    ///
    /// A blank search term selects everything; otherwise the trimmed term is
    /// matched as a case-insensitive substring of the name or the SKU.
    pub async fn get_items(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<ItemWithSupplier>, ServiceError> {
        let filter = match search {
            Some(term) if !term.trim().is_empty() => ItemFilter {
                term: Some(term.trim().to_string()),
            },
            _ => ItemFilter::default(),
        };

        self.store.query_items(filter).await
    }

    /// Persists a new catalog item and returns it as stored.
    ///
    /// Assigns a fresh id when the caller supplied none and stamps the
    /// creation time. A duplicate SKU or a dangling supplier reference
    /// surfaces as [`ServiceError::ConstraintViolation`].
    pub async fn add_item(&self, new: NewItem) -> Result<inventory_item::Model, ServiceError> {
        let item = inventory_item::Model {
            id: new.id.unwrap_or_else(Uuid::new_v4),
            sku: new.sku,
            name: new.name,
            description: new.description,
            quantity_on_hand: new.quantity_on_hand,
            unit_price: new.unit_price,
            supplier_id: new.supplier_id,
            created_at: Utc::now().into(),
            updated_at: None,
        };

        self.store.insert(item).await
    }

    /// Overwrites an existing item's mutable fields and stamps the update
    /// time. Returns `Ok(None)` when no item has the given id — a no-op, not
    /// an error. Id and creation time are immutable.
    ///
    /// All mutable fields are replaced unconditionally; concurrent writers
    /// race on a first-writer-wins basis.
    pub async fn update_item(
        &self,
        changes: ItemChanges,
    ) -> Result<Option<inventory_item::Model>, ServiceError> {
        let Some(existing) = self.store.find_by_id(changes.id).await? else {
            return Ok(None);
        };

        let updated = inventory_item::Model {
            sku: changes.sku,
            name: changes.name,
            description: changes.description,
            quantity_on_hand: changes.quantity_on_hand,
            unit_price: changes.unit_price,
            supplier_id: changes.supplier_id,
            updated_at: Some(Utc::now().into()),
            ..existing
        };

        self.store.update(updated).await
    }

    /// Hard-deletes an item. Returns `Ok(false)` when no item has the given
    /// id. Deleting an item referenced by an order line surfaces as
    /// [`ServiceError::ConstraintViolation`].
    pub async fn delete_item(&self, id: Uuid) -> Result<bool, ServiceError> {
        self.store.delete(id).await
    }
}
