//! Test utilities for database testing.
//!
//! Sets up in-memory SQLite databases with the real migrations applied, plus
//! fixture helpers for suppliers, items and orders.

use anyhow::Result;
use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use stockroom::gateways::{CredentialRepository, InventoryRepository};
use stockroom::models::{inventory_item, order, order_item, supplier, user};
use stockroom::services::{AuthService, InventoryService};

/// Sets up an in-memory SQLite database with all migrations applied.
///
/// The pool is capped at a single connection so every query sees the same
/// in-memory database. SQLite foreign key enforcement is on by default here,
/// which the RESTRICT/CASCADE tests rely on.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the two domain services over repositories on the given database.
#[allow(dead_code)]
pub fn build_services(db: &DatabaseConnection) -> (AuthService, InventoryService) {
    let pool = Arc::new(db.clone());

    let auth = AuthService::new(Arc::new(CredentialRepository::new(Arc::clone(&pool))));
    let inventory = InventoryService::new(Arc::new(InventoryRepository::new(pool)));

    (auth, inventory)
}

/// Inserts a user row with credentials derived from `password`.
#[allow(dead_code)]
pub async fn insert_user(
    db: &DatabaseConnection,
    auth: &AuthService,
    username: &str,
    password: &str,
    role: user::Role,
) -> Result<user::Model> {
    let (hash, salt) = auth.hash_password(password);

    let row = user::ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(username.to_string()),
        password_hash: Set(hash.to_vec()),
        password_salt: Set(salt.to_vec()),
        role: Set(role),
        created_at: Set(Utc::now().into()),
        updated_at: Set(None),
    };

    Ok(row.insert(db).await?)
}

/// Inserts a supplier row.
#[allow(dead_code)]
pub async fn insert_supplier(db: &DatabaseConnection, name: &str) -> Result<supplier::Model> {
    let row = supplier::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        email: Set(None),
        phone: Set(None),
        address: Set(None),
        created_at: Set(Utc::now().into()),
        updated_at: Set(None),
    };

    Ok(row.insert(db).await?)
}

/// Inserts an inventory item row.
#[allow(dead_code)]
pub async fn insert_item(
    db: &DatabaseConnection,
    sku: &str,
    name: &str,
    quantity: i32,
    unit_price: Decimal,
    supplier_id: Uuid,
) -> Result<inventory_item::Model> {
    let row = inventory_item::ActiveModel {
        id: Set(Uuid::new_v4()),
        sku: Set(sku.to_string()),
        name: Set(name.to_string()),
        description: Set(None),
        quantity_on_hand: Set(quantity),
        unit_price: Set(unit_price),
        supplier_id: Set(supplier_id),
        created_at: Set(Utc::now().into()),
        updated_at: Set(None),
    };

    Ok(row.insert(db).await?)
}

/// Inserts an order with a single line referencing `inventory_item_id`.
#[allow(dead_code)]
pub async fn insert_order_with_line(
    db: &DatabaseConnection,
    inventory_item_id: Uuid,
) -> Result<order::Model> {
    let order_row = order::ActiveModel {
        id: Set(Uuid::new_v4()),
        order_date: Set(Utc::now().into()),
        customer_name: Set(Some("Test Customer".to_string())),
        created_at: Set(Utc::now().into()),
        updated_at: Set(None),
    };
    let stored_order = order_row.insert(db).await?;

    let line = order_item::ActiveModel {
        id: Set(Uuid::new_v4()),
        order_id: Set(stored_order.id),
        inventory_item_id: Set(inventory_item_id),
        quantity: Set(1),
        unit_price: Set(Decimal::new(999, 2)),
        created_at: Set(Utc::now().into()),
        updated_at: Set(None),
    };
    line.insert(db).await?;

    Ok(stored_order)
}
