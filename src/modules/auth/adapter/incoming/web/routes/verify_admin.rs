use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::verify_admin::VerifyAdminError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct VerifyAdminRequest {
    #[serde(default)]
    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyAdminResponse {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[utoipa::path(
    post,
    path = "/api/auth/verify",
    tag = "auth",
    request_body = VerifyAdminRequest,
    responses(
        (status = 200, description = "Password accepted, admin token issued", body = inline(SuccessResponse<VerifyAdminResponse>)),
        (status = 400, description = "Password missing", body = ErrorResponse),
        (status = 401, description = "Password rejected", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/auth/verify")]
pub async fn verify_admin_handler(
    req: web::Json<VerifyAdminRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.verify_admin.execute(&req.password).await {
        Ok(issued) => ApiResponse::success(VerifyAdminResponse {
            token: issued.token,
            issued_at: issued.issued_at,
            expires_at: issued.expires_at,
        }),
        Err(VerifyAdminError::MissingPassword) => {
            ApiResponse::bad_request("Password is required")
        }
        Err(VerifyAdminError::InvalidPassword) => ApiResponse::unauthorized("Invalid password"),
        Err(e) => {
            error!("Admin verification failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::IssuedToken;
    use crate::auth::application::use_cases::verify_admin::MockVerifyAdminUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    fn app_state(mock: MockVerifyAdminUseCase) -> web::Data<AppState> {
        TestAppStateBuilder::default().with_verify_admin(mock).build()
    }

    #[actix_web::test]
    async fn correct_password_returns_token() {
        let mut mock = MockVerifyAdminUseCase::new();
        mock.expect_execute()
            .withf(|password: &str| password == "s3cret")
            .returning(|_| {
                Ok(IssuedToken {
                    token: "jwt".into(),
                    issued_at: Utc::now(),
                    expires_at: Utc::now(),
                })
            });

        let app = test::init_service(App::new().app_data(app_state(mock)).service(verify_admin_handler)).await;
        let req = test::TestRequest::post()
            .uri("/api/auth/verify")
            .set_json(json!({ "password": "s3cret" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["token"], "jwt");
        assert!(body["data"]["expiresAt"].is_string());
    }

    #[actix_web::test]
    async fn wrong_password_is_unauthorized() {
        let mut mock = MockVerifyAdminUseCase::new();
        mock.expect_execute()
            .returning(|_| Err(VerifyAdminError::InvalidPassword));

        let app = test::init_service(App::new().app_data(app_state(mock)).service(verify_admin_handler)).await;
        let req = test::TestRequest::post()
            .uri("/api/auth/verify")
            .set_json(json!({ "password": "nope" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Invalid password");
    }

    #[actix_web::test]
    async fn missing_password_is_bad_request() {
        let mut mock = MockVerifyAdminUseCase::new();
        mock.expect_execute()
            .returning(|_| Err(VerifyAdminError::MissingPassword));

        let app = test::init_service(App::new().app_data(app_state(mock)).service(verify_admin_handler)).await;
        let req = test::TestRequest::post()
            .uri("/api/auth/verify")
            .set_json(json!({}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
