//! Database migrations for the stockroom service.
//!
//! This module contains all database migrations using SeaORM Migration.

pub use sea_orm_migration::prelude::*;

mod m2025_05_01_000001_create_users;
mod m2025_05_01_000002_create_suppliers;
mod m2025_05_01_000003_create_inventory_items;
mod m2025_05_01_000004_create_orders;
mod m2025_05_01_000005_create_order_items;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2025_05_01_000001_create_users::Migration),
            Box::new(m2025_05_01_000002_create_suppliers::Migration),
            Box::new(m2025_05_01_000003_create_inventory_items::Migration),
            Box::new(m2025_05_01_000004_create_orders::Migration),
            Box::new(m2025_05_01_000005_create_order_items::Migration),
        ]
    }
}
