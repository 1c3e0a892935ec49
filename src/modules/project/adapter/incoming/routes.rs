use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use crate::auth::application::domain::entities::AdminSession;
use crate::modules::project::domain::{ProjectFilter, ProjectInput, ProjectPatch};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/projects")]
pub async fn list_projects_handler(
    query: web::Query<ProjectFilter>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.list(query.into_inner()).await {
        Ok(projects) => ApiResponse::success(projects),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[get("/api/projects/{id}")]
pub async fn get_project_handler(path: web::Path<Uuid>, data: web::Data<AppState>) -> impl Responder {
    match data.project.get(path.into_inner()).await {
        Ok(project) => ApiResponse::success(project),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[post("/api/projects")]
pub async fn create_project_handler(
    _admin: AdminSession,
    req: web::Json<ProjectInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.create(req.into_inner()).await {
        Ok(project) => ApiResponse::created(project),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[put("/api/projects/{id}")]
pub async fn update_project_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    req: web::Json<ProjectPatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .project
        .update(path.into_inner(), req.into_inner())
        .await
    {
        Ok(project) => ApiResponse::success_with_message(project, "Project updated successfully"),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[delete("/api/projects/{id}")]
pub async fn delete_project_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::message("Project deleted successfully"),
        Err(e) => ApiResponse::from_content_error(e),
    }
}
