use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::auth::application::use_cases::change_password::ChangePasswordError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[serde(default)]
    pub current_password: String,
    #[serde(default)]
    pub new_password: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordResponse {
    /// Store this value in `ADMIN_PASSWORD_HASH` and restart the service.
    pub password_hash: String,
}

#[utoipa::path(
    put,
    path = "/api/auth/change-password",
    tag = "auth",
    security(("bearer_auth" = [])),
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "New hash computed", body = inline(SuccessResponse<ChangePasswordResponse>)),
        (status = 400, description = "New password rejected", body = ErrorResponse),
        (status = 401, description = "Not authenticated or wrong current password", body = ErrorResponse)
    )
)]
#[put("/api/auth/change-password")]
pub async fn change_password_handler(
    _admin: AdminSession,
    req: web::Json<ChangePasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    match data
        .change_password
        .execute(&req.current_password, &req.new_password)
        .await
    {
        Ok(password_hash) => ApiResponse::success_with_message(
            ChangePasswordResponse { password_hash },
            "Update ADMIN_PASSWORD_HASH with the new hash to apply the change",
        ),
        Err(ChangePasswordError::IncorrectCurrent) => {
            ApiResponse::unauthorized("Current password is incorrect")
        }
        Err(ChangePasswordError::HashFailed(e)) => {
            error!("Change password failed: {}", e);
            ApiResponse::internal_error()
        }
        Err(e) => ApiResponse::bad_request(&e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::use_cases::change_password::MockChangePasswordUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_token, token_provider_data};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    async fn call(mock: MockChangePasswordUseCase, body: Value) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default()
            .with_change_password(mock)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(change_password_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/auth/change-password")
            .insert_header(("Authorization", format!("Bearer {}", admin_token())))
            .set_json(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn returns_new_hash() {
        let mut mock = MockChangePasswordUseCase::new();
        mock.expect_execute()
            .withf(|current: &str, new: &str| current == "old-password" && new == "new-password")
            .returning(|_, _| Ok("$2b$12$hash".into()));

        let (status, body) = call(
            mock,
            json!({ "currentPassword": "old-password", "newPassword": "new-password" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["passwordHash"], "$2b$12$hash");
    }

    #[actix_web::test]
    async fn short_password_is_bad_request() {
        let mut mock = MockChangePasswordUseCase::new();
        mock.expect_execute()
            .returning(|_, _| Err(ChangePasswordError::TooShort));

        let (status, body) = call(
            mock,
            json!({ "currentPassword": "old-password", "newPassword": "short" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "New password must be at least 8 characters long"
        );
    }

    #[actix_web::test]
    async fn wrong_current_password_is_unauthorized() {
        let mut mock = MockChangePasswordUseCase::new();
        mock.expect_execute()
            .returning(|_, _| Err(ChangePasswordError::IncorrectCurrent));

        let (status, _) = call(
            mock,
            json!({ "currentPassword": "guess", "newPassword": "new-password" }),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
