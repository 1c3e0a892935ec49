use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use crate::auth::application::domain::entities::AdminSession;
use crate::modules::skill::domain::{SkillFilter, SkillInput, SkillPatch};
use crate::shared::api::ApiResponse;
use crate::shared::reorder::ReorderItem;
use crate::AppState;

#[get("/api/skills")]
pub async fn list_skills_handler(
    query: web::Query<SkillFilter>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.list(query.into_inner()).await {
        Ok(skills) => ApiResponse::success(skills),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

// Registered ahead of `/api/skills/{id}`.
#[put("/api/skills/reorder")]
pub async fn reorder_skills_handler(
    _admin: AdminSession,
    req: web::Json<Vec<ReorderItem>>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.reorder(req.into_inner()).await {
        Ok(skills) => ApiResponse::success_with_message(skills, "Skills reordered successfully"),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[get("/api/skills/{id}")]
pub async fn get_skill_handler(path: web::Path<Uuid>, data: web::Data<AppState>) -> impl Responder {
    match data.skill.get(path.into_inner()).await {
        Ok(skill) => ApiResponse::success(skill),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[post("/api/skills")]
pub async fn create_skill_handler(
    _admin: AdminSession,
    req: web::Json<SkillInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.create(req.into_inner()).await {
        Ok(skill) => ApiResponse::created(skill),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[put("/api/skills/{id}")]
pub async fn update_skill_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    req: web::Json<SkillPatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.update(path.into_inner(), req.into_inner()).await {
        Ok(skill) => ApiResponse::success_with_message(skill, "Skill updated successfully"),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[delete("/api/skills/{id}")]
pub async fn delete_skill_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::message("Skill deleted successfully"),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::skill::application::skill_service::MockSkillUseCase;
    use crate::modules::skill::domain::SkillCategory;
    use crate::shared::api::json_config::{custom_path_config, custom_query_config};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_token, token_provider_data};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    macro_rules! skill_app {
        ($mock:expr) => {
            test::init_service(
                App::new()
                    .app_data(TestAppStateBuilder::default().with_skill($mock).build())
                    .app_data(token_provider_data())
                    .app_data(custom_path_config())
                    .app_data(custom_query_config())
                    .service(list_skills_handler)
                    .service(reorder_skills_handler)
                    .service(get_skill_handler)
                    .service(create_skill_handler)
                    .service(update_skill_handler)
                    .service(delete_skill_handler),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn reorder_is_not_captured_by_id_route() {
        let id = Uuid::new_v4();
        let mut mock = MockSkillUseCase::new();
        mock.expect_update().times(0);
        mock.expect_reorder()
            .withf(move |items: &Vec<ReorderItem>| items.len() == 1 && items[0].id == id)
            .times(1)
            .returning(|_| Ok(vec![]));

        let app = skill_app!(mock);
        let req = test::TestRequest::put()
            .uri("/api/skills/reorder")
            .insert_header(("Authorization", format!("Bearer {}", admin_token())))
            .set_json(json!([{ "id": id, "order": 2 }]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Skills reordered successfully");
    }

    #[actix_web::test]
    async fn list_reads_marquee_flag() {
        let mut mock = MockSkillUseCase::new();
        mock.expect_list()
            .withf(|f: &SkillFilter| f.marquee == Some(true) && f.category.is_none())
            .times(1)
            .returning(|_| Ok(vec![]));

        let app = skill_app!(mock);
        let req = test::TestRequest::get()
            .uri("/api/skills?marquee=true")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn list_reads_category() {
        let mut mock = MockSkillUseCase::new();
        mock.expect_list()
            .withf(|f: &SkillFilter| f.category == Some(SkillCategory::Frontend))
            .times(1)
            .returning(|_| Ok(vec![]));

        let app = skill_app!(mock);
        let req = test::TestRequest::get()
            .uri("/api/skills?category=frontend")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn reorder_requires_admin() {
        let mut mock = MockSkillUseCase::new();
        mock.expect_reorder().times(0);

        let app = skill_app!(mock);
        let req = test::TestRequest::put()
            .uri("/api/skills/reorder")
            .set_json(json!([]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
