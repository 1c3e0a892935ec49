use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::email::application::ports::outgoing::ContactMessage;
use crate::modules::contact::application::ContactFormError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactSubmitRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl From<ContactSubmitRequest> for ContactMessage {
    fn from(req: ContactSubmitRequest) -> Self {
        ContactMessage {
            name: req.name,
            email: req.email,
            subject: req.subject,
            message: req.message,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/contact/submit",
    tag = "contact",
    request_body = ContactSubmitRequest,
    responses(
        (status = 200, description = "Message delivered", body = inline(SuccessResponse<String>)),
        (status = 400, description = "Missing fields, invalid email or form disabled", body = ErrorResponse),
        (status = 500, description = "No recipient configured or mail delivery failed", body = ErrorResponse)
    )
)]
#[post("/api/contact/submit")]
pub async fn submit_contact_handler(
    req: web::Json<ContactSubmitRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact_form.submit(req.into_inner().into()).await {
        Ok(()) => ApiResponse::message("Message sent successfully"),
        Err(ContactFormError::Content(e)) => ApiResponse::from_content_error(e),
        Err(e @ ContactFormError::RecipientNotConfigured) => {
            error!("Contact form submitted but no contact email is configured");
            ApiResponse::upstream_error(&e.to_string())
        }
        Err(e @ ContactFormError::Delivery(_)) => ApiResponse::upstream_error(&e.to_string()),
        Err(e) => ApiResponse::bad_request(&e.to_string()),
    }
}
