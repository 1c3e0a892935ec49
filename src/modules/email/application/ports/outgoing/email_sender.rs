use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html_body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    #[error("Could not build email: {0}")]
    BuildFailed(String),

    #[error("Email delivery failed: {0}")]
    TransportFailed(String),
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, email: OutgoingEmail) -> Result<(), EmailError>;
}
