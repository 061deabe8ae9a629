use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The single outstanding reset-token record for a user. Holds only the
/// salted hash of the secret; the plaintext is never persisted.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct ResetTokenRecord {
    pub user_id: Uuid,
    #[serde(skip_serializing)]
    pub secret_hash: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl ResetTokenRecord {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
