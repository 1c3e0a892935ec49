use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::email::application::ports::outgoing::email_sender::{
    EmailError, EmailSender, OutgoingEmail,
};
use crate::shared::config::{optional, parsed, required, ConfigError, EnvLookup};

#[derive(Clone, PartialEq, Eq)]
pub enum SmtpConfig {
    /// Authenticated TLS relay.
    Relay {
        server: String,
        username: String,
        password: String,
    },
    /// Plain local catcher (Mailpit, MailHog) used when `RUST_ENV=test`.
    Local { host: String, port: u16 },
}

#[cfg(not(tarpaulin_include))]
impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SmtpConfig::Relay {
                server, username, ..
            } => f
                .debug_struct("Relay")
                .field("server", server)
                .field("username", username)
                .finish(),
            SmtpConfig::Local { host, port } => f
                .debug_struct("Local")
                .field("host", host)
                .field("port", port)
                .finish(),
        }
    }
}

impl SmtpConfig {
    pub fn from_lookup(lookup: EnvLookup, test_mode: bool) -> Result<Self, ConfigError> {
        if test_mode {
            return Ok(SmtpConfig::Local {
                host: optional(lookup, "SMTP_HOST", "localhost"),
                port: parsed(lookup, "SMTP_PORT", 1025)?,
            });
        }

        Ok(SmtpConfig::Relay {
            server: required(lookup, "SMTP_SERVER")?,
            username: required(lookup, "SMTP_USERNAME")?,
            password: required(lookup, "SMTP_PASSWORD")?,
        })
    }
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from: Mailbox,
}

fn parse_mailbox(address: &str) -> Result<Mailbox, EmailError> {
    address
        .parse::<Mailbox>()
        .map_err(|_| EmailError::InvalidAddress(address.to_string()))
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str) -> Result<Self, EmailError> {
        Ok(Self {
            mailer,
            from: parse_mailbox(from_email)?,
        })
    }

    pub fn from_config(config: &SmtpConfig, from_email: &str) -> Result<Self, EmailError> {
        let mailer: Box<dyn Mailer> = match config {
            SmtpConfig::Relay {
                server,
                username,
                password,
            } => {
                let creds = Credentials::new(username.clone(), password.clone());
                let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(server)
                    .map_err(|e| EmailError::TransportFailed(e.to_string()))?
                    .credentials(creds)
                    .build();
                Box::new(transport)
            }
            SmtpConfig::Local { host, port } => Box::new(
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
                    .port(*port)
                    .build(),
            ),
        };

        Self::new_with_mailer(mailer, from_email)
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(&self, email: OutgoingEmail) -> Result<(), EmailError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(parse_mailbox(&email.to)?)
            .subject(email.subject)
            .header(ContentType::TEXT_HTML);

        if let Some(reply_to) = &email.reply_to {
            builder = builder.reply_to(parse_mailbox(reply_to)?);
        }

        let message = builder
            .body(email.html_body)
            .map_err(|e| EmailError::BuildFailed(e.to_string()))?;

        self.mailer
            .send(message)
            .await
            .map_err(EmailError::TransportFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturingMailer {
        sent: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Mailer for CapturingMailer {
        async fn send(&self, email: Message) -> Result<(), String> {
            let raw = String::from_utf8_lossy(&email.formatted()).to_string();
            self.sent.lock().unwrap().push(raw);
            Ok(())
        }
    }

    struct FailingMailer;

    #[async_trait]
    impl Mailer for FailingMailer {
        async fn send(&self, _: Message) -> Result<(), String> {
            Err("connection refused".to_string())
        }
    }

    fn email(to: &str) -> OutgoingEmail {
        OutgoingEmail {
            to: to.to_string(),
            reply_to: Some("visitor@example.org".to_string()),
            subject: "Hello".to_string(),
            html_body: "<p>Hi</p>".to_string(),
        }
    }

    #[tokio::test]
    async fn sends_with_reply_to_header() {
        let mailer = CapturingMailer::default();
        let sender =
            SmtpEmailSender::new_with_mailer(Box::new(mailer.clone()), "site@example.com").unwrap();

        sender.send_email(email("owner@example.com")).await.unwrap();

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("Reply-To: visitor@example.org"));
        assert!(sent[0].contains("To: owner@example.com"));
    }

    #[test]
    fn invalid_from_address_is_rejected_at_construction() {
        let result = SmtpEmailSender::new_with_mailer(Box::new(FailingMailer), "not-an-email");
        assert!(matches!(result, Err(EmailError::InvalidAddress(_))));
    }

    #[tokio::test]
    async fn invalid_recipient_never_reaches_mailer() {
        struct PanickingMailer;

        #[async_trait]
        impl Mailer for PanickingMailer {
            async fn send(&self, _: Message) -> Result<(), String> {
                panic!("mailer must not be called for an invalid recipient");
            }
        }

        let sender =
            SmtpEmailSender::new_with_mailer(Box::new(PanickingMailer), "site@example.com").unwrap();

        let result = sender.send_email(email("nope")).await;
        assert_eq!(result, Err(EmailError::InvalidAddress("nope".into())));
    }

    #[tokio::test]
    async fn transport_failure_is_reported() {
        let sender =
            SmtpEmailSender::new_with_mailer(Box::new(FailingMailer), "site@example.com").unwrap();

        let result = sender.send_email(email("owner@example.com")).await;
        assert_eq!(
            result,
            Err(EmailError::TransportFailed("connection refused".into()))
        );
    }

    #[tokio::test]
    async fn local_config_builds_without_credentials() {
        let config = SmtpConfig::Local {
            host: "localhost".into(),
            port: 1025,
        };
        assert!(SmtpEmailSender::from_config(&config, "site@example.com").is_ok());
    }
}
