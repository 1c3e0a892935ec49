use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use crate::auth::application::domain::entities::AdminSession;
use crate::modules::certification::domain::{CertificationInput, CertificationPatch};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/certifications")]
pub async fn list_certifications_handler(data: web::Data<AppState>) -> impl Responder {
    match data.certification.list().await {
        Ok(certs) => ApiResponse::success(certs),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[get("/api/certifications/{id}")]
pub async fn get_certification_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.certification.get(path.into_inner()).await {
        Ok(cert) => ApiResponse::success(cert),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[post("/api/certifications")]
pub async fn create_certification_handler(
    _admin: AdminSession,
    req: web::Json<CertificationInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.certification.create(req.into_inner()).await {
        Ok(cert) => ApiResponse::created(cert),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[put("/api/certifications/{id}")]
pub async fn update_certification_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    req: web::Json<CertificationPatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .certification
        .update(path.into_inner(), req.into_inner())
        .await
    {
        Ok(cert) => ApiResponse::success_with_message(cert, "Certification updated successfully"),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[delete("/api/certifications/{id}")]
pub async fn delete_certification_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.certification.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::message("Certification deleted successfully"),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::certification::application::certification_service::MockCertificationUseCase;
    use crate::shared::api::json_config::custom_json_config;
    use crate::shared::error::ContentError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_token, token_provider_data};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn missing_date_is_reported() {
        let mut mock = MockCertificationUseCase::new();
        mock.expect_create()
            .withf(|input: &CertificationInput| input.date.is_none())
            .returning(|_| Err(ContentError::validation("Certification date is required")));

        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_certification(mock).build())
                .app_data(token_provider_data())
                .app_data(custom_json_config())
                .service(create_certification_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/certifications")
            .insert_header(("Authorization", format!("Bearer {}", admin_token())))
            .set_json(json!({ "title": "CKA", "issuer": "CNCF" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Certification date is required");
    }

    #[actix_web::test]
    async fn list_is_public() {
        let mut mock = MockCertificationUseCase::new();
        mock.expect_list().times(1).returning(|| Ok(vec![]));

        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_certification(mock).build())
                .service(list_certifications_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/certifications").to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!([]));
    }
}
