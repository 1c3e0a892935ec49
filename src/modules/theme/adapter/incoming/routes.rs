use actix_web::{get, post, put, web, Responder};

use crate::auth::application::domain::entities::AdminSession;
use crate::modules::theme::domain::ThemeUpdate;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/theme")]
pub async fn get_theme_handler(data: web::Data<AppState>) -> impl Responder {
    match data.theme.get().await {
        Ok(theme) => ApiResponse::success(theme),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[put("/api/theme")]
pub async fn update_theme_handler(
    _admin: AdminSession,
    req: web::Json<ThemeUpdate>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.theme.update(req.into_inner()).await {
        Ok(theme) => ApiResponse::success_with_message(theme, "Theme updated successfully"),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[post("/api/theme/reset")]
pub async fn reset_theme_handler(_admin: AdminSession, data: web::Data<AppState>) -> impl Responder {
    match data.theme.reset().await {
        Ok(theme) => ApiResponse::success_with_message(theme, "Theme reset to defaults"),
        Err(e) => ApiResponse::from_content_error(e),
    }
}
