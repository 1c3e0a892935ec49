use serde::{Deserialize, Serialize};

use crate::auth::application::domain::entities::{AdminSession, IssuedToken};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Session expired")]
    SessionExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token does not carry the admin role")]
    InvalidRole,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Claims of the admin credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    pub role: String,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
}

pub trait TokenProvider: Send + Sync {
    fn issue_admin_token(&self) -> Result<IssuedToken, TokenError>;
    fn verify_admin_token(&self, token: &str) -> Result<AdminSession, TokenError>;
}
