use async_trait::async_trait;

use super::email_sender::EmailError;

/// A message submitted through the public contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    /// Delivers `message` to the site owner at `recipient`.
    async fn notify(&self, recipient: &str, message: &ContactMessage) -> Result<(), EmailError>;
}
