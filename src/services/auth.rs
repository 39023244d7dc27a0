//! Authentication service
//!
//! Password hashing and verification plus username/password authentication
//! against the credential store gateway.
//!
//! Hashing is PBKDF2-HMAC-SHA256 with a per-user random salt. Verification
//! compares derived keys in constant time so the comparison does not leak
//! where the first differing byte occurs.

use pbkdf2::pbkdf2_hmac;
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;
use std::sync::Arc;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::error::ServiceError;
use crate::gateways::CredentialGateway;
use crate::models::user;

/// Length of the random per-user salt in bytes.
pub const SALT_LEN: usize = 16;
/// Length of the derived key in bytes.
pub const HASH_LEN: usize = 32;
/// PBKDF2 iteration count.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Authenticates username/password pairs against the credential store.
pub struct AuthService {
    credentials: Arc<dyn CredentialGateway>,
}

impl AuthService {
    pub fn new(credentials: Arc<dyn CredentialGateway>) -> Self {
        Self { credentials }
    }

    /// Derives a key from `password` under a freshly generated random salt.
    ///
    /// An empty password is accepted and produces a valid (if weak) hash;
    /// rejecting it is the caller's business, not this function's.
    pub fn hash_password(&self, password: &str) -> ([u8; HASH_LEN], [u8; SALT_LEN]) {
        let mut salt = [0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);

        let mut hash = [0u8; HASH_LEN];
        pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, PBKDF2_ITERATIONS, &mut hash);

        (hash, salt)
    }

    /// Re-derives the key under `salt` and compares it to `hash` in constant
    /// time. True only on exact match.
    pub fn verify_password(&self, password: &str, hash: &[u8], salt: &[u8]) -> bool {
        let mut computed = Zeroizing::new([0u8; HASH_LEN]);
        pbkdf2_hmac::<Sha256>(
            password.as_bytes(),
            salt,
            PBKDF2_ITERATIONS,
            &mut computed[..],
        );

        computed[..].ct_eq(hash).into()
    }

    /// Authenticates a username/password pair.
    ///
    /// The username is normalized (trimmed, lowercased) before lookup, so
    /// `Admin` and `admin` name the same account. Unknown username and wrong
    /// password are indistinguishable to the caller: both yield `Ok(None)`.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<user::Model>, ServiceError> {
        let normalized = username.trim().to_lowercase();

        let Some(user) = self
            .credentials
            .find_by_normalized_username(&normalized)
            .await?
        else {
            return Ok(None);
        };

        if self.verify_password(password, &user.password_hash, &user.password_salt) {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::models::user::Role;

    /// In-memory credential store fake.
    struct FakeCredentials {
        users: Vec<user::Model>,
    }

    #[async_trait]
    impl CredentialGateway for FakeCredentials {
        async fn find_by_normalized_username(
            &self,
            username: &str,
        ) -> Result<Option<user::Model>, ServiceError> {
            Ok(self
                .users
                .iter()
                .find(|u| u.username.to_lowercase() == username)
                .cloned())
        }
    }

    fn service_with_user(username: &str, password: &str) -> AuthService {
        let bootstrap = AuthService::new(Arc::new(FakeCredentials { users: vec![] }));
        let (hash, salt) = bootstrap.hash_password(password);

        let user = user::Model {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: hash.to_vec(),
            password_salt: salt.to_vec(),
            role: Role::Admin,
            created_at: Utc::now().into(),
            updated_at: None,
        };

        AuthService::new(Arc::new(FakeCredentials { users: vec![user] }))
    }

    #[test]
    fn hash_then_verify_roundtrip() {
        let service = AuthService::new(Arc::new(FakeCredentials { users: vec![] }));

        let (hash, salt) = service.hash_password("correct horse battery staple");

        assert!(service.verify_password("correct horse battery staple", &hash, &salt));
        assert!(!service.verify_password("correct horse battery stable", &hash, &salt));
    }

    #[test]
    fn same_password_gets_fresh_salt_and_hash() {
        let service = AuthService::new(Arc::new(FakeCredentials { users: vec![] }));

        let (hash_a, salt_a) = service.hash_password("secret");
        let (hash_b, salt_b) = service.hash_password("secret");

        assert_ne!(salt_a, salt_b);
        assert_ne!(hash_a, hash_b);
    }

    #[test]
    fn empty_password_is_hashable() {
        let service = AuthService::new(Arc::new(FakeCredentials { users: vec![] }));

        let (hash, salt) = service.hash_password("");

        assert!(service.verify_password("", &hash, &salt));
        assert!(!service.verify_password("x", &hash, &salt));
    }

    #[test]
    fn verify_rejects_truncated_hash() {
        let service = AuthService::new(Arc::new(FakeCredentials { users: vec![] }));

        let (hash, salt) = service.hash_password("secret");

        assert!(!service.verify_password("secret", &hash[..16], &salt));
    }

    #[tokio::test]
    async fn authenticate_normalizes_username() {
        let service = service_with_user("admin", "Admin@123");

        for candidate in ["admin", "Admin", "  ADMIN  "] {
            let user = service
                .authenticate(candidate, "Admin@123")
                .await
                .unwrap()
                .expect("authentication should succeed");
            assert_eq!(user.username, "admin");
        }
    }

    #[tokio::test]
    async fn unknown_user_and_wrong_password_are_indistinguishable() {
        let service = service_with_user("admin", "Admin@123");

        let wrong_password = service.authenticate("admin", "nope").await.unwrap();
        let unknown_user = service.authenticate("nobody", "Admin@123").await.unwrap();

        assert!(wrong_password.is_none());
        assert!(unknown_user.is_none());
    }
}
