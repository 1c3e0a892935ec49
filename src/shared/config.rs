// src/shared/config.rs
use std::env;
use std::str::FromStr;

use crate::modules::auth::adapter::outgoing::jwt::JwtConfig;
use crate::modules::email::adapter::outgoing::smtp_sender::SmtpConfig;
use crate::modules::media::adapter::outgoing::cloudinary::CloudinaryConfig;

/// Reads one variable by name. `from_env` passes the process environment;
/// tests pass a map.
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

pub fn required(lookup: EnvLookup, name: &'static str) -> Result<String, ConfigError> {
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

pub fn optional(lookup: EnvLookup, name: &str, default: &str) -> String {
    lookup(name)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

pub fn parsed<T: FromStr>(lookup: EnvLookup, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match lookup(name).filter(|value| !value.trim().is_empty()) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            name,
            reason: e.to_string(),
        }),
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub admin_password_hash: String,
    pub jwt: JwtConfig,
    pub cloudinary: CloudinaryConfig,
    pub smtp: SmtpConfig,
    pub email_from: String,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and then reads the
    /// process environment.
    #[cfg(not(tarpaulin_include))]
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", environment);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(&|name: &str| env::var(name).ok())
    }

    pub fn from_lookup(lookup: EnvLookup) -> Result<Self, ConfigError> {
        let environment = optional(lookup, "RUST_ENV", "development");

        let database = DatabaseConfig {
            url: required(lookup, "DATABASE_URL")?,
            max_connections: parsed(lookup, "DB_MAX_CONNECTIONS", 20)?,
            min_connections: parsed(lookup, "DB_MIN_CONNECTIONS", 2)?,
        };

        if database.min_connections > database.max_connections {
            return Err(ConfigError::Invalid {
                name: "DB_MIN_CONNECTIONS",
                reason: "must not exceed DB_MAX_CONNECTIONS".to_string(),
            });
        }

        Ok(Self {
            host: optional(lookup, "HOST", "0.0.0.0"),
            port: parsed(lookup, "PORT", 5000)?,
            database,
            admin_password_hash: required(lookup, "ADMIN_PASSWORD_HASH")?,
            jwt: JwtConfig::from_lookup(lookup)?,
            cloudinary: CloudinaryConfig::from_lookup(lookup)?,
            smtp: SmtpConfig::from_lookup(lookup, environment == "test")?,
            email_from: required(lookup, "EMAIL_FROM")?,
            environment,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
