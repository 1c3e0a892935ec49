use actix_web::{get, put, web, Responder};

use crate::auth::application::domain::entities::AdminSession;
use crate::modules::hero::domain::HeroUpdate;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/hero")]
pub async fn get_hero_handler(data: web::Data<AppState>) -> impl Responder {
    match data.hero.get().await {
        Ok(hero) => ApiResponse::success(hero),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[put("/api/hero")]
pub async fn update_hero_handler(
    _admin: AdminSession,
    req: web::Json<HeroUpdate>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.hero.update(req.into_inner()).await {
        Ok(hero) => ApiResponse::success_with_message(hero, "Hero section updated successfully"),
        Err(e) => ApiResponse::from_content_error(e),
    }
}
