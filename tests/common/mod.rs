use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Duration;

use authgate::config::{Config, HashCost};
use authgate::email::Notifier;
use authgate::service::AuthService;
use authgate::store::memory::{MemoryCredentialStore, MemoryResetTokenStore};

/// An auth service wired to in-memory stores and a recording notifier.
pub struct TestApp {
    pub service: AuthService,
    pub credentials: Arc<MemoryCredentialStore>,
    pub reset_tokens: Arc<MemoryResetTokenStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub config: Config,
}

pub fn test_config() -> Config {
    Config {
        jwt_secret: "test-secret".to_string(),
        base_url: "http://localhost:3000".to_string(),
        session_token_ttl: Duration::hours(1),
        reset_token_ttl: Duration::minutes(15),
        // Minimal argon2 cost so tests stay fast.
        hash_cost: HashCost {
            memory_kib: 8,
            iterations: 1,
        },
        smtp: None,
    }
}

pub fn spawn_app() -> TestApp {
    let credentials = Arc::new(MemoryCredentialStore::new());
    let reset_tokens = Arc::new(MemoryResetTokenStore::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let config = test_config();

    let service = AuthService::new(
        credentials.clone(),
        reset_tokens.clone(),
        notifier.clone(),
        config.clone(),
    )
    .expect("service construction failed");

    TestApp {
        service,
        credentials,
        reset_tokens,
        notifier,
        config,
    }
}

/// Same as `spawn_app` but every notification attempt fails.
pub fn spawn_app_with_failing_notifier() -> TestApp {
    let app = spawn_app();
    let service = AuthService::new(
        app.credentials.clone(),
        app.reset_tokens.clone(),
        Arc::new(FailingNotifier),
        app.config.clone(),
    )
    .expect("service construction failed");
    TestApp { service, ..app }
}

/// Pull the plaintext secret out of a reset link's query string.
pub fn secret_from_link(link: &str) -> String {
    link.split("token=")
        .nth(1)
        .and_then(|rest| rest.split('&').next())
        .expect("link missing token parameter")
        .to_string()
}

#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<SentMail>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, to: &str, subject: &str, html_body: &str) -> Result<(), String> {
        self.sent.lock().unwrap().push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: html_body.to_string(),
        });
        Ok(())
    }
}

pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify(&self, _to: &str, _subject: &str, _html_body: &str) -> Result<(), String> {
        Err("SMTP connection refused".to_string())
    }
}
