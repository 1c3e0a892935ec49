use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, warn};

use crate::auth::application::ports::outgoing::password_hasher::PasswordHasher;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("Current and new password are required")]
    MissingFields,

    #[error("New password must be at least 8 characters long")]
    TooShort,

    #[error("New password must be different from the current password")]
    Unchanged,

    #[error("Current password is incorrect")]
    IncorrectCurrent,

    #[error("Could not hash password: {0}")]
    HashFailed(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChangePasswordUseCase: Send + Sync {
    /// Returns the hash of `new_password`. The caller stores it in
    /// `ADMIN_PASSWORD_HASH`; the running process keeps the old hash.
    async fn execute(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<String, ChangePasswordError>;
}

pub struct ChangePasswordService {
    admin_hash: String,
    hasher: Arc<dyn PasswordHasher>,
}

impl ChangePasswordService {
    pub fn new(admin_hash: String, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { admin_hash, hasher }
    }
}

#[async_trait]
impl ChangePasswordUseCase for ChangePasswordService {
    async fn execute(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<String, ChangePasswordError> {
        if current_password.is_empty() || new_password.is_empty() {
            return Err(ChangePasswordError::MissingFields);
        }
        if new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ChangePasswordError::TooShort);
        }
        if new_password == current_password {
            return Err(ChangePasswordError::Unchanged);
        }

        let matches = self
            .hasher
            .verify_password(current_password, &self.admin_hash)
            .await
            .map_err(|e| ChangePasswordError::HashFailed(e.to_string()))?;

        if !matches {
            warn!("Password change rejected: current password mismatch");
            return Err(ChangePasswordError::IncorrectCurrent);
        }

        self.hasher.hash_password(new_password).await.map_err(|e| {
            error!("Hashing new admin password failed: {}", e);
            ChangePasswordError::HashFailed(e.to_string())
        })
    }
}
