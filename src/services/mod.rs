//! # Domain Services
//!
//! The service layer: credential authentication and inventory CRUD with
//! search. Services are stateless across calls; all state lives behind the
//! store gateways injected at construction.

pub mod auth;
pub mod inventory;

pub use auth::AuthService;
pub use inventory::{InventoryService, ItemChanges, NewItem};
