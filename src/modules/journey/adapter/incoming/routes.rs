use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use crate::auth::application::domain::entities::AdminSession;
use crate::modules::journey::domain::{JourneyStepInput, JourneyUpdate};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/journey")]
pub async fn get_journey_handler(data: web::Data<AppState>) -> impl Responder {
    match data.journey.get().await {
        Ok(journey) => ApiResponse::success(journey),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[put("/api/journey")]
pub async fn update_journey_handler(
    _admin: AdminSession,
    req: web::Json<JourneyUpdate>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.journey.update(req.into_inner()).await {
        Ok(journey) => ApiResponse::success_with_message(journey, "Journey updated successfully"),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[post("/api/journey/steps")]
pub async fn add_journey_step_handler(
    _admin: AdminSession,
    req: web::Json<JourneyStepInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.journey.add_step(req.into_inner()).await {
        Ok(journey) => ApiResponse::created(journey),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[put("/api/journey/steps/{id}")]
pub async fn update_journey_step_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    req: web::Json<JourneyStepInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .journey
        .update_step(path.into_inner(), req.into_inner())
        .await
    {
        Ok(journey) => ApiResponse::success_with_message(journey, "Journey step updated"),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[delete("/api/journey/steps/{id}")]
pub async fn delete_journey_step_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.journey.delete_step(path.into_inner()).await {
        Ok(journey) => ApiResponse::success_with_message(journey, "Journey step deleted"),
        Err(e) => ApiResponse::from_content_error(e),
    }
}
