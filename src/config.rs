use chrono::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub jwt_secret: String,
    pub base_url: String,
    pub session_token_ttl: Duration,
    pub reset_token_ttl: Duration,
    pub hash_cost: HashCost,
    pub smtp: Option<SmtpConfig>,
}

/// Argon2 work factor. Parallelism is fixed at 1.
#[derive(Debug, Clone)]
pub struct HashCost {
    pub memory_kib: u32,
    pub iterations: u32,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub from: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let jwt_secret = env_required("AUTHGATE_JWT_SECRET")?;

        let base_url = env_or("AUTHGATE_BASE_URL", "http://localhost:3000");

        let session_token_ttl_secs: i64 = env_or("AUTHGATE_SESSION_TOKEN_TTL_SECS", "3600")
            .parse()
            .map_err(|e| format!("Invalid AUTHGATE_SESSION_TOKEN_TTL_SECS: {e}"))?;

        let reset_token_ttl_secs: i64 = env_or("AUTHGATE_RESET_TOKEN_TTL_SECS", "900")
            .parse()
            .map_err(|e| format!("Invalid AUTHGATE_RESET_TOKEN_TTL_SECS: {e}"))?;

        let memory_kib: u32 = env_or("AUTHGATE_HASH_MEMORY_KIB", "19456")
            .parse()
            .map_err(|e| format!("Invalid AUTHGATE_HASH_MEMORY_KIB: {e}"))?;

        let iterations: u32 = env_or("AUTHGATE_HASH_ITERATIONS", "2")
            .parse()
            .map_err(|e| format!("Invalid AUTHGATE_HASH_ITERATIONS: {e}"))?;

        let smtp = match (
            std::env::var("AUTHGATE_SMTP_HOST").ok(),
            std::env::var("AUTHGATE_SMTP_PORT").ok(),
            std::env::var("AUTHGATE_SMTP_USER").ok(),
            std::env::var("AUTHGATE_SMTP_PASS").ok(),
            std::env::var("AUTHGATE_SMTP_FROM").ok(),
        ) {
            (Some(host), Some(port), Some(user), Some(pass), Some(from)) => Some(SmtpConfig {
                host,
                port: port
                    .parse()
                    .map_err(|e| format!("Invalid AUTHGATE_SMTP_PORT: {e}"))?,
                user,
                pass,
                from,
            }),
            _ => None,
        };

        Ok(Config {
            jwt_secret,
            base_url,
            session_token_ttl: Duration::seconds(session_token_ttl_secs),
            reset_token_ttl: Duration::seconds(reset_token_ttl_secs),
            hash_cost: HashCost {
                memory_kib,
                iterations,
            },
            smtp,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
