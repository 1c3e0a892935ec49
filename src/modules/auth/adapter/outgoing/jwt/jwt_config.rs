use std::fmt;

use crate::auth::application::domain::entities::SESSION_TTL_SECS;
use crate::shared::config::{optional, required, ConfigError, EnvLookup};

#[derive(Clone, PartialEq, Eq)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub session_ttl_secs: i64,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("issuer", &self.issuer)
            .field("session_ttl_secs", &self.session_ttl_secs)
            .finish()
    }
}

impl JwtConfig {
    pub const DEFAULT_ISSUER: &'static str = "portfolio-cms";

    pub fn from_lookup(lookup: EnvLookup) -> Result<Self, ConfigError> {
        let secret_key = required(lookup, "AUTH_TOKEN_SECRET")?;

        // HS256 needs at least 32 bytes of key material.
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid {
                name: "AUTH_TOKEN_SECRET",
                reason: "must be at least 32 characters long".to_string(),
            });
        }

        Ok(Self {
            secret_key,
            issuer: optional(lookup, "AUTH_TOKEN_ISSUER", Self::DEFAULT_ISSUER),
            session_ttl_secs: SESSION_TTL_SECS,
        })
    }
}
