pub mod contact_form;
pub mod contact_service;

pub use contact_form::{ContactFormError, ContactFormService, ContactFormUseCase};
pub use contact_service::{ContactService, ContactUseCase};
