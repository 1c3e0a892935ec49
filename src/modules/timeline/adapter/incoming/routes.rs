use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use crate::auth::application::domain::entities::AdminSession;
use crate::modules::timeline::domain::{TimelineItemInput, TimelineUpdate};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/timeline")]
pub async fn get_timeline_handler(data: web::Data<AppState>) -> impl Responder {
    match data.timeline.get().await {
        Ok(timeline) => ApiResponse::success(timeline),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[put("/api/timeline")]
pub async fn update_timeline_handler(
    _admin: AdminSession,
    req: web::Json<TimelineUpdate>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.timeline.update(req.into_inner()).await {
        Ok(timeline) => ApiResponse::success_with_message(timeline, "Timeline updated successfully"),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[post("/api/timeline/items")]
pub async fn add_timeline_item_handler(
    _admin: AdminSession,
    req: web::Json<TimelineItemInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.timeline.add_item(req.into_inner()).await {
        Ok(timeline) => ApiResponse::created(timeline),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[put("/api/timeline/items/{id}")]
pub async fn update_timeline_item_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    req: web::Json<TimelineItemInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .timeline
        .update_item(path.into_inner(), req.into_inner())
        .await
    {
        Ok(timeline) => ApiResponse::success_with_message(timeline, "Timeline item updated"),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[delete("/api/timeline/items/{id}")]
pub async fn delete_timeline_item_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.timeline.delete_item(path.into_inner()).await {
        Ok(timeline) => ApiResponse::success_with_message(timeline, "Timeline item deleted"),
        Err(e) => ApiResponse::from_content_error(e),
    }
}
