//! User entity model
//!
//! This module contains the SeaORM entity model for the users table, which
//! stores login credentials as a derived key plus per-user salt.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role flag stored on a user account. It is recorded but not enforced
/// anywhere in this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum Role {
    #[sea_orm(num_value = 1)]
    Admin,
    #[sea_orm(num_value = 2)]
    Clerk,
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Role::Admin => write!(f, "Admin"),
            Role::Clerk => write!(f, "Clerk"),
        }
    }
}

/// User entity representing a login account
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the user (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Login name, stored normalized (trimmed, lowercase). Uniqueness is
    /// case-insensitive because every write goes through normalization.
    pub username: String,

    /// 32-byte PBKDF2-derived key. Always created together with the salt.
    pub password_hash: Vec<u8>,

    /// 16 random bytes, unique per user.
    pub password_salt: Vec<u8>,

    /// Role flag (Admin or Clerk)
    pub role: Role,

    /// Timestamp when the user was created
    pub created_at: DateTimeWithTimeZone,

    /// Timestamp when the user was last updated
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
