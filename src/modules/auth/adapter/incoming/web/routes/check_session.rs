use actix_web::{get, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::shared::api::ApiResponse;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub authenticated: bool,
    pub role: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[utoipa::path(
    get,
    path = "/api/auth/check",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Credential is valid", body = inline(SuccessResponse<SessionResponse>)),
        (status = 401, description = "Missing, invalid or expired credential", body = ErrorResponse)
    )
)]
#[get("/api/auth/check")]
pub async fn check_session_handler(session: AdminSession) -> impl Responder {
    ApiResponse::success(SessionResponse {
        authenticated: true,
        role: session.role,
        issued_at: session.issued_at,
        expires_at: session.expires_at,
    })
}
