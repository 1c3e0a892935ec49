use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use crate::auth::application::domain::entities::AdminSession;
use crate::modules::experience::domain::{ExperienceInput, ExperiencePatch};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/experiences")]
pub async fn list_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    match data.experience.list().await {
        Ok(experiences) => ApiResponse::success(experiences),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[get("/api/experiences/{id}")]
pub async fn get_experience_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.experience.get(path.into_inner()).await {
        Ok(experience) => ApiResponse::success(experience),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[post("/api/experiences")]
pub async fn create_experience_handler(
    _admin: AdminSession,
    req: web::Json<ExperienceInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.experience.create(req.into_inner()).await {
        Ok(experience) => ApiResponse::created(experience),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[put("/api/experiences/{id}")]
pub async fn update_experience_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    req: web::Json<ExperiencePatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .experience
        .update(path.into_inner(), req.into_inner())
        .await
    {
        Ok(experience) => {
            ApiResponse::success_with_message(experience, "Experience updated successfully")
        }
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[delete("/api/experiences/{id}")]
pub async fn delete_experience_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.experience.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::message("Experience deleted successfully"),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::experience::application::experience_service::MockExperienceUseCase;
    use crate::shared::api::json_config::custom_path_config;
    use crate::shared::error::ContentError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_token, token_provider_data};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn invalid_date_range_is_400() {
        let mut mock = MockExperienceUseCase::new();
        mock.expect_update().returning(|_, _| {
            Err(ContentError::validation("End date cannot be before start date"))
        });

        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_experience(mock).build())
                .app_data(token_provider_data())
                .app_data(custom_path_config())
                .service(update_experience_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/experiences/{}", Uuid::new_v4()))
            .insert_header(("Authorization", format!("Bearer {}", admin_token())))
            .set_json(json!({ "endDate": "2000-01-01" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "End date cannot be before start date");
    }

    #[actix_web::test]
    async fn delete_requires_admin() {
        let mut mock = MockExperienceUseCase::new();
        mock.expect_delete().times(0);

        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_experience(mock).build())
                .app_data(token_provider_data())
                .service(delete_experience_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/experiences/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
