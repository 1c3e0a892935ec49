use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::auth::application::ports::outgoing::token_provider::TokenError;

pub const ADMIN_ROLE: &str = "admin";

/// Lifetime of an admin credential, counted from issuance.
pub const SESSION_TTL_SECS: i64 = 24 * 60 * 60;

/// Tolerated clock drift for credentials issued slightly in the future.
pub const CLOCK_SKEW_SECS: i64 = 30;

/// Proof that the request carries a valid admin credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSession {
    pub role: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedToken {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// A credential is valid while `now - issued_at` does not exceed the TTL.
pub fn check_session_window(issued_at: i64, now: i64, ttl_secs: i64) -> Result<(), TokenError> {
    if issued_at > now + CLOCK_SKEW_SECS {
        return Err(TokenError::TokenNotYetValid);
    }
    if now - issued_at > ttl_secs {
        return Err(TokenError::SessionExpired);
    }
    Ok(())
}
