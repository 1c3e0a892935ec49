use std::fmt;
use std::sync::Arc;

use ammonia::clean_text;
use async_trait::async_trait;

use crate::email::application::ports::outgoing::contact_notifier::{
    ContactMessage, ContactNotifier,
};
use crate::email::application::ports::outgoing::email_sender::{
    EmailError, EmailSender, OutgoingEmail,
};

/// Renders contact-form submissions as an HTML notification. Visitor input is
/// escaped before it reaches the template.
#[derive(Clone)]
pub struct ContactEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
}

impl fmt::Debug for ContactEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactEmailService")
            .field("sender", &"<dyn EmailSender>")
            .finish()
    }
}

impl ContactEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>) -> Self {
        Self { sender }
    }

    fn render(message: &ContactMessage) -> String {
        let body = clean_text(&message.message).replace("&#10;", "<br>");

        format!(
            r#"<div style="font-family: sans-serif; max-width: 600px;">
  <h2>New contact form submission</h2>
  <p><strong>Name:</strong> {name}</p>
  <p><strong>Email:</strong> {email}</p>
  <p><strong>Subject:</strong> {subject}</p>
  <hr>
  <p>{body}</p>
</div>"#,
            name = clean_text(&message.name),
            email = clean_text(&message.email),
            subject = clean_text(&message.subject),
            body = body,
        )
    }
}

#[async_trait]
impl ContactNotifier for ContactEmailService {
    async fn notify(&self, recipient: &str, message: &ContactMessage) -> Result<(), EmailError> {
        let email = OutgoingEmail {
            to: recipient.to_string(),
            reply_to: Some(message.email.clone()),
            subject: format!("Portfolio Contact: {}", message.subject),
            html_body: Self::render(message),
        };

        self.sender.send_email(email).await
    }
}
