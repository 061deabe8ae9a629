use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use crate::error::AuthError;
use crate::models::{ResetTokenRecord, User};
use crate::store::{CredentialStore, ResetTokenStore};

/// In-memory credential store. The email index shard lock makes the
/// check-then-insert in `create` atomic, so two concurrent signups with the
/// same email cannot both succeed.
#[derive(Default)]
pub struct MemoryCredentialStore {
    users: DashMap<Uuid, User>,
    by_email: DashMap<String, Uuid>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let Some(id) = self.by_email.get(email).map(|e| *e.value()) else {
            return Ok(None);
        };
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthError> {
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    async fn create(&self, email: &str, password_hash: &str) -> Result<User, AuthError> {
        match self.by_email.entry(email.to_string()) {
            Entry::Occupied(_) => Err(AuthError::DuplicateEmail),
            Entry::Vacant(slot) => {
                let user = User {
                    id: Uuid::new_v4(),
                    email: email.to_string(),
                    password_hash: password_hash.to_string(),
                    created_at: Utc::now(),
                };
                // Insert the record before publishing the index entry so a
                // lookup never sees an id without a user behind it.
                self.users.insert(user.id, user.clone());
                slot.insert(user.id);
                Ok(user)
            }
        }
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<(), AuthError> {
        match self.users.get_mut(&id) {
            Some(mut user) => {
                user.password_hash = password_hash.to_string();
                Ok(())
            }
            None => Err(AuthError::UserNotFound),
        }
    }
}

/// In-memory reset-token store keyed by user id. `DashMap::insert` is atomic
/// per key, which gives `replace_for_user` its linearizability without any
/// application-level locking.
#[derive(Default)]
pub struct MemoryResetTokenStore {
    records: DashMap<Uuid, ResetTokenRecord>,
}

impl MemoryResetTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResetTokenStore for MemoryResetTokenStore {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<ResetTokenRecord>, AuthError> {
        Ok(self.records.get(&user_id).map(|r| r.value().clone()))
    }

    async fn replace_for_user(
        &self,
        user_id: Uuid,
        secret_hash: &str,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AuthError> {
        self.records.insert(
            user_id,
            ResetTokenRecord {
                user_id,
                secret_hash: secret_hash.to_string(),
                created_at,
                expires_at,
            },
        );
        Ok(())
    }

    async fn delete_for_user(&self, user_id: Uuid) -> Result<(), AuthError> {
        self.records.remove(&user_id);
        Ok(())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, AuthError> {
        // Count inside the closure: retain sweeps shard by shard, so a
        // concurrent replace can land in an already-swept shard and a
        // before/after length diff would be wrong.
        let purged = AtomicU64::new(0);
        self.records.retain(|_, record| {
            if record.is_expired(now) {
                purged.fetch_add(1, Ordering::Relaxed);
                false
            } else {
                true
            }
        });
        Ok(purged.into_inner())
    }
}
