use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;
use tracing::{error, info};

use crate::email::application::ports::outgoing::{ContactMessage, ContactNotifier};
use crate::modules::contact::domain::Contact;
use crate::shared::error::ContentError;
use crate::shared::singleton::{store_error, SingletonStore};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactFormError {
    #[error("Please provide all required fields")]
    MissingFields,

    #[error("Please provide a valid email address")]
    InvalidEmail,

    #[error("The contact form is currently disabled")]
    Disabled,

    #[error("Contact email is not configured")]
    RecipientNotConfigured,

    #[error("Failed to send message: {0}")]
    Delivery(String),

    #[error(transparent)]
    Content(#[from] ContentError),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactFormUseCase: Send + Sync {
    async fn submit(&self, message: ContactMessage) -> Result<(), ContactFormError>;
}

pub struct ContactFormService<S> {
    store: S,
    notifier: Arc<dyn ContactNotifier>,
}

impl<S: SingletonStore<Contact>> ContactFormService<S> {
    pub fn new(store: S, notifier: Arc<dyn ContactNotifier>) -> Self {
        Self { store, notifier }
    }
}

fn trimmed(message: ContactMessage) -> Result<ContactMessage, ContactFormError> {
    let message = ContactMessage {
        name: message.name.trim().to_string(),
        email: message.email.trim().to_string(),
        subject: message.subject.trim().to_string(),
        message: message.message.trim().to_string(),
    };

    let fields = [&message.name, &message.email, &message.subject, &message.message];
    if fields.iter().any(|f| f.is_empty()) {
        return Err(ContactFormError::MissingFields);
    }
    if !EmailAddress::is_valid(&message.email) {
        return Err(ContactFormError::InvalidEmail);
    }
    Ok(message)
}

#[async_trait]
impl<S: SingletonStore<Contact>> ContactFormUseCase for ContactFormService<S> {
    async fn submit(&self, message: ContactMessage) -> Result<(), ContactFormError> {
        let message = trimmed(message)?;

        let contact = self
            .store
            .find_or_bootstrap()
            .await
            .map_err(store_error::<Contact>)?
            .document;

        if !contact.form_enabled {
            return Err(ContactFormError::Disabled);
        }

        let recipient = contact
            .recipient()
            .ok_or(ContactFormError::RecipientNotConfigured)?;

        self.notifier
            .notify(&recipient.address, &message)
            .await
            .map_err(|e| {
                error!("Contact notification failed: {}", e);
                ContactFormError::Delivery(e.to_string())
            })?;

        info!(subject = %message.subject, "Contact form message delivered");
        Ok(())
    }
}
