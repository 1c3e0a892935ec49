use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, warn};

use crate::auth::application::domain::entities::IssuedToken;
use crate::auth::application::ports::outgoing::{
    password_hasher::{HashError, PasswordHasher},
    token_provider::TokenProvider,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyAdminError {
    #[error("Password is required")]
    MissingPassword,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Could not verify password: {0}")]
    HashFailed(String),

    #[error("Could not issue token: {0}")]
    TokenFailed(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VerifyAdminUseCase: Send + Sync {
    async fn execute(&self, password: &str) -> Result<IssuedToken, VerifyAdminError>;
}

pub struct VerifyAdminService {
    admin_hash: String,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
}

impl VerifyAdminService {
    pub fn new(
        admin_hash: String,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            admin_hash,
            hasher,
            tokens,
        }
    }

    /// Fails when the configured admin hash uses a scheme no hasher can verify.
    pub fn ensure_hash_supported(&self) -> Result<(), HashError> {
        if self.hasher.recognizes(&self.admin_hash) {
            Ok(())
        } else {
            Err(HashError::UnsupportedScheme)
        }
    }
}

#[async_trait]
impl VerifyAdminUseCase for VerifyAdminService {
    async fn execute(&self, password: &str) -> Result<IssuedToken, VerifyAdminError> {
        if password.is_empty() {
            return Err(VerifyAdminError::MissingPassword);
        }

        let matches = self
            .hasher
            .verify_password(password, &self.admin_hash)
            .await
            .map_err(|e| {
                error!("Admin password verification failed: {}", e);
                VerifyAdminError::HashFailed(e.to_string())
            })?;

        if !matches {
            warn!("Admin login rejected: password mismatch");
            return Err(VerifyAdminError::InvalidPassword);
        }

        self.tokens
            .issue_admin_token()
            .map_err(|e| VerifyAdminError::TokenFailed(e.to_string()))
    }
}
