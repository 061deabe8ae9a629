#[derive(Debug)]
pub enum AuthError {
    /// The email is already registered. The store's uniqueness constraint is
    /// the source of truth; the service also raises this from its fast-path
    /// existence check.
    DuplicateEmail,
    UserNotFound,
    /// No token on record for the user, or the presented secret does not
    /// match. Deliberately a single kind so callers cannot tell which.
    InvalidOrExpiredToken,
    TokenExpired,
    /// The hash primitive could not run (e.g. malformed stored hash).
    Hashing(String),
    Store(String),
    Internal(String),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::DuplicateEmail => write!(f, "Email already exists"),
            AuthError::UserNotFound => write!(f, "User does not exist"),
            AuthError::InvalidOrExpiredToken => {
                write!(f, "Invalid or expired password reset token")
            }
            AuthError::TokenExpired => write!(f, "Token has expired"),
            AuthError::Hashing(msg) => write!(f, "Hashing Error: {msg}"),
            AuthError::Store(msg) => write!(f, "Store Error: {msg}"),
            AuthError::Internal(msg) => write!(f, "Internal Error: {msg}"),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        AuthError::Store(err.to_string())
    }
}
