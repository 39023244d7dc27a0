//! Database seeding functionality
//!
//! First-run bootstrap data: one admin account, one default supplier and one
//! sample catalog item. A store that already has rows is left untouched.

use anyhow::Result;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use uuid::Uuid;

use crate::models::user::Role;
use crate::models::{inventory_item, supplier, user};
use crate::services::AuthService;

/// Seeds the store with initial data when it is empty.
///
/// Creates an `admin` user with `admin_password` if there are no users, and a
/// default supplier with one sample item if there are no suppliers. Safe to
/// run on every startup.
pub async fn seed_initial_data(
    db: &DatabaseConnection,
    auth: &AuthService,
    admin_password: &str,
) -> Result<()> {
    seed_admin_user(db, auth, admin_password).await?;
    seed_catalog(db).await?;

    log::info!("seeding completed");
    Ok(())
}

async fn seed_admin_user(
    db: &DatabaseConnection,
    auth: &AuthService,
    admin_password: &str,
) -> Result<()> {
    let existing = user::Entity::find().count(db).await?;
    if existing > 0 {
        log::info!("users already present, skipping admin seed");
        return Ok(());
    }

    let (hash, salt) = auth.hash_password(admin_password);

    let admin = user::ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set("admin".to_string()),
        password_hash: Set(hash.to_vec()),
        password_salt: Set(salt.to_vec()),
        role: Set(Role::Admin),
        created_at: Set(Utc::now().into()),
        updated_at: Set(None),
    };
    admin.insert(db).await?;

    log::info!("created default admin user");
    Ok(())
}

async fn seed_catalog(db: &DatabaseConnection) -> Result<()> {
    let existing = supplier::Entity::find().count(db).await?;
    if existing > 0 {
        log::info!("suppliers already present, skipping catalog seed");
        return Ok(());
    }

    let supplier_id = Uuid::new_v4();
    let default_supplier = supplier::ActiveModel {
        id: Set(supplier_id),
        name: Set("Default Supplier".to_string()),
        email: Set(None),
        phone: Set(None),
        address: Set(None),
        created_at: Set(Utc::now().into()),
        updated_at: Set(None),
    };
    default_supplier.insert(db).await?;

    let sample_item = inventory_item::ActiveModel {
        id: Set(Uuid::new_v4()),
        sku: Set("SKU-001".to_string()),
        name: Set("Sample Item".to_string()),
        description: Set(Some("Initial sample inventory item".to_string())),
        quantity_on_hand: Set(100),
        unit_price: Set(Decimal::new(999, 2)),
        supplier_id: Set(supplier_id),
        created_at: Set(Utc::now().into()),
        updated_at: Set(None),
    };
    sample_item.insert(db).await?;

    log::info!("created default supplier and sample item");
    Ok(())
}
