//! # Store Gateways
//!
//! Narrow persistence-facing interfaces consumed by the services, plus their
//! SeaORM-backed implementations. The traits keep the service layer testable
//! against in-memory fakes without a real store.

pub mod credential;
pub mod inventory;

pub use credential::{CredentialGateway, CredentialRepository};
pub use inventory::{InventoryGateway, InventoryRepository, ItemFilter};
