use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::jwt::{encode_token, Claims};
use crate::auth::password::SecretHasher;
use crate::auth::token;
use crate::config::Config;
use crate::email::{templates, Notifier};
use crate::error::AuthError;
use crate::store::{CredentialStore, ResetTokenStore};

#[derive(Debug, Serialize)]
pub struct SignupOutcome {
    pub user_id: Uuid,
    pub email: String,
    pub session_token: String,
}

/// Orchestrates the credential lifecycle over its collaborators. Holds no
/// mutable state of its own; every operation runs to completion
/// independently and only suspends on store I/O and hashing.
pub struct AuthService {
    credentials: Arc<dyn CredentialStore>,
    reset_tokens: Arc<dyn ResetTokenStore>,
    notifier: Arc<dyn Notifier>,
    hasher: SecretHasher,
    config: Config,
}

impl AuthService {
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        reset_tokens: Arc<dyn ResetTokenStore>,
        notifier: Arc<dyn Notifier>,
        config: Config,
    ) -> Result<Self, AuthError> {
        let hasher = SecretHasher::new(&config.hash_cost)?;
        Ok(Self {
            credentials,
            reset_tokens,
            notifier,
            hasher,
            config,
        })
    }

    /// Create an account and issue a short-lived session token. The
    /// existence check is a fast path for a clear error; the store's
    /// uniqueness constraint resolves races.
    pub async fn signup(&self, email: &str, password: &str) -> Result<SignupOutcome, AuthError> {
        let email = normalize_email(email);

        if self.credentials.find_by_email(&email).await?.is_some() {
            return Err(AuthError::DuplicateEmail);
        }

        let password_hash = self.hasher.hash(password)?;
        let user = self.credentials.create(&email, &password_hash).await?;

        let claims = Claims::new(user.id, self.config.session_token_ttl);
        let session_token =
            encode_token(&claims, &self.config.jwt_secret).map_err(AuthError::Internal)?;

        Ok(SignupOutcome {
            user_id: user.id,
            email: user.email,
            session_token,
        })
    }

    /// Issue a reset token and send the link. Replaces any outstanding
    /// record for the user, so at most one secret is ever live. Returns the
    /// link; in production the link reaches the user only through the
    /// notifier, never the caller.
    pub async fn request_password_reset(&self, email: &str) -> Result<String, AuthError> {
        let email = normalize_email(email);

        let user = self
            .credentials
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let secret = token::generate_reset_secret();
        let secret_hash = self.hasher.hash(&secret)?;

        let now = Utc::now();
        self.reset_tokens
            .replace_for_user(user.id, &secret_hash, now, now + self.config.reset_token_ttl)
            .await?;

        let link = format!(
            "{}/password-reset?token={}&id={}",
            self.config.base_url, secret, user.id
        );

        // Best-effort: the token stays valid even if the message never
        // goes out.
        if let Err(e) = self
            .notifier
            .notify(
                &user.email,
                "Password Reset Request",
                &templates::render_reset_request(&link),
            )
            .await
        {
            tracing::warn!(user_id = %user.id, "Failed to send password reset email: {e}");
        }

        Ok(link)
    }

    /// Consume a reset token and set a new password. Absence and secret
    /// mismatch surface as the same error; expiry is checked only after the
    /// secret verifies, so the distinction leaks nothing to guessers.
    pub async fn reset_password(
        &self,
        user_id: Uuid,
        presented_secret: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        let record = self
            .reset_tokens
            .find_by_user(user_id)
            .await?
            .ok_or(AuthError::InvalidOrExpiredToken)?;

        if !self.hasher.verify(presented_secret, &record.secret_hash)? {
            return Err(AuthError::InvalidOrExpiredToken);
        }

        if record.is_expired(Utc::now()) {
            return Err(AuthError::TokenExpired);
        }

        let password_hash = self.hasher.hash(new_password)?;
        self.credentials
            .update_password(user_id, &password_hash)
            .await?;

        if let Some(user) = self.credentials.find_by_id(user_id).await? {
            if let Err(e) = self
                .notifier
                .notify(
                    &user.email,
                    "Password Reset Successfully",
                    &templates::render_reset_confirmation(),
                )
                .await
            {
                tracing::warn!(user_id = %user_id, "Failed to send reset confirmation email: {e}");
            }
        }

        // Single-use: the record must be gone before the secret can be
        // presented again.
        self.reset_tokens.delete_for_user(user_id).await?;

        Ok(())
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
