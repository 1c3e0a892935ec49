use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use crate::auth::application::domain::entities::AdminSession;
use crate::modules::service_offering::domain::{ServiceFilter, ServiceInput, ServicePatch};
use crate::shared::api::ApiResponse;
use crate::shared::reorder::ReorderItem;
use crate::AppState;

#[get("/api/services")]
pub async fn list_services_handler(
    query: web::Query<ServiceFilter>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.service.list(query.into_inner()).await {
        Ok(services) => ApiResponse::success(services),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[get("/api/services/footer")]
pub async fn footer_services_handler(data: web::Data<AppState>) -> impl Responder {
    match data.service.footer().await {
        Ok(services) => ApiResponse::success(services),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[put("/api/services/reorder")]
pub async fn reorder_services_handler(
    _admin: AdminSession,
    req: web::Json<Vec<ReorderItem>>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.service.reorder(req.into_inner()).await {
        Ok(services) => {
            ApiResponse::success_with_message(services, "Services reordered successfully")
        }
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[get("/api/services/{id}")]
pub async fn get_service_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.service.get(path.into_inner()).await {
        Ok(service) => ApiResponse::success(service),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[post("/api/services")]
pub async fn create_service_handler(
    _admin: AdminSession,
    req: web::Json<ServiceInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.service.create(req.into_inner()).await {
        Ok(service) => ApiResponse::created(service),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[put("/api/services/{id}")]
pub async fn update_service_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    req: web::Json<ServicePatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .service
        .update(path.into_inner(), req.into_inner())
        .await
    {
        Ok(service) => ApiResponse::success_with_message(service, "Service updated successfully"),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[delete("/api/services/{id}")]
pub async fn delete_service_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.service.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::message("Service deleted successfully"),
        Err(e) => ApiResponse::from_content_error(e),
    }
}
