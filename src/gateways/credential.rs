//! Credential store gateway
//!
//! Lookup of user records by normalized username, abstracted behind a trait
//! so the authentication service can be exercised without a database.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::error::ServiceError;
use crate::models::user::{self, Entity as User};

/// Persistence-facing lookup of a user record.
#[async_trait]
pub trait CredentialGateway: Send + Sync {
    /// Finds a user whose username matches `username` case-insensitively.
    /// The caller is expected to pass an already-normalized (trimmed,
    /// lowercased) value.
    async fn find_by_normalized_username(
        &self,
        username: &str,
    ) -> Result<Option<user::Model>, ServiceError>;
}

/// SeaORM-backed implementation of [`CredentialGateway`].
#[derive(Debug, Clone)]
pub struct CredentialRepository {
    /// Database connection pool
    pub db: Arc<DatabaseConnection>,
}

impl CredentialRepository {
    /// Creates a new CredentialRepository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CredentialGateway for CredentialRepository {
    async fn find_by_normalized_username(
        &self,
        username: &str,
    ) -> Result<Option<user::Model>, ServiceError> {
        // lower() on the stored column so the match stays case-insensitive
        // even if a row was written without normalization.
        let user = User::find()
            .filter(Expr::expr(Func::lower(Expr::col(user::Column::Username))).eq(username))
            .one(&*self.db)
            .await
            .map_err(ServiceError::from_db)?;

        Ok(user)
    }
}
