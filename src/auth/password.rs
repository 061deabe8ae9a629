use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::config::HashCost;
use crate::error::AuthError;

/// One-way, salted hasher for secrets — user passwords and reset-token
/// secrets alike. Each call generates a fresh salt, so hashing the same
/// input twice yields different outputs.
#[derive(Debug, Clone)]
pub struct SecretHasher {
    params: Params,
}

impl SecretHasher {
    pub fn new(cost: &HashCost) -> Result<Self, AuthError> {
        let params = Params::new(cost.memory_kib, cost.iterations, 1, None)
            .map_err(|e| AuthError::Hashing(format!("Invalid params: {e}")))?;
        Ok(Self { params })
    }

    /// Hash a secret using Argon2id with an internally generated salt.
    pub fn hash(&self, secret: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());

        argon2
            .hash_password(secret.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AuthError::Hashing(format!("Hashing failed: {e}")))
    }

    /// Verify a secret against a stored hash. A hash that cannot be parsed
    /// is an infrastructure failure, not a mismatch.
    pub fn verify(&self, secret: &str, stored_hash: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(stored_hash)
            .map_err(|e| AuthError::Hashing(format!("Invalid hash: {e}")))?;
        Ok(Argon2::default()
            .verify_password(secret.as_bytes(), &parsed)
            .is_ok())
    }
}
