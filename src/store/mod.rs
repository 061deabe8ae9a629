pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::AuthError;
use crate::models::{ResetTokenRecord, User};

/// Keyed store of user records. The store's email uniqueness constraint is
/// the source of truth for `DuplicateEmail`.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthError>;

    /// Insert a new user. Fails with `AuthError::DuplicateEmail` if the
    /// email is already registered.
    async fn create(&self, email: &str, password_hash: &str) -> Result<User, AuthError>;

    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<(), AuthError>;
}

/// At most one outstanding reset-token record per user id.
///
/// Reads return expired records as-is; the authoritative expiry check is the
/// `expires_at` comparison in the service. `purge_expired` is opportunistic
/// cleanup and correctness never depends on it running.
#[async_trait]
pub trait ResetTokenStore: Send + Sync {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<ResetTokenRecord>, AuthError>;

    /// Atomically replace the user's record: the old record must not be
    /// observable once the new one is inserted, and concurrent replaces for
    /// the same user leave exactly one record.
    async fn replace_for_user(
        &self,
        user_id: Uuid,
        secret_hash: &str,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AuthError>;

    async fn delete_for_user(&self, user_id: Uuid) -> Result<(), AuthError>;

    /// Remove records whose `expires_at` is in the past. Returns how many
    /// were removed.
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, AuthError>;
}
