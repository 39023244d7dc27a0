//! # Data Models
//!
//! This module contains the SeaORM entity models backing the stockroom
//! service.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod inventory_item;
pub mod order;
pub mod order_item;
pub mod supplier;
pub mod user;

pub use inventory_item::Entity as InventoryItem;
pub use order::Entity as Order;
pub use order_item::Entity as OrderItem;
pub use supplier::Entity as Supplier;
pub use user::Entity as User;

/// Basic service information response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    /// The name of the service
    pub service: String,
    /// The version of the service
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            service: "stockroom".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
