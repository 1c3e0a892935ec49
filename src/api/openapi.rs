use crate::api::schemas::ErrorResponse;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    ChangePasswordRequest, ChangePasswordResponse, SessionResponse, VerifyAdminRequest,
    VerifyAdminResponse,
};
use crate::modules::contact::adapter::incoming::ContactSubmitRequest;
use crate::modules::media::domain::MediaRef;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "Content API behind a personal portfolio site and its admin dashboard",
    ),
    paths(
        crate::auth::adapter::incoming::web::routes::verify_admin::verify_admin_handler,
        crate::auth::adapter::incoming::web::routes::check_session::check_session_handler,
        crate::auth::adapter::incoming::web::routes::change_password::change_password_handler,
        crate::modules::contact::adapter::incoming::submit::submit_contact_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            VerifyAdminRequest,
            VerifyAdminResponse,
            SessionResponse,
            ChangePasswordRequest,
            ChangePasswordResponse,
            ContactSubmitRequest,
            MediaRef,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin credential endpoints"),
        (name = "contact", description = "Public contact form"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Admin token from POST /api/auth/verify"))
                        .build(),
                ),
            )
        }
    }
}
