pub mod contact_notifier;
pub mod email_sender;

pub use contact_notifier::{ContactMessage, ContactNotifier};
pub use email_sender::{EmailError, EmailSender, OutgoingEmail};
