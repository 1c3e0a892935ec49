use actix_multipart::Multipart;
use actix_web::{delete, post, web, HttpResponse, Responder};
use tracing::{error, warn};

use super::multipart::{stage_files, stage_single};
use crate::auth::application::domain::entities::AdminSession;
use crate::modules::media::domain::{UploadPolicy, UploadRejection};
use crate::shared::api::ApiResponse;
use crate::AppState;

fn rejection_response(rejection: UploadRejection) -> HttpResponse {
    match rejection {
        UploadRejection::Staging(e) => {
            error!("Failed to stage upload: {}", e);
            ApiResponse::internal_error()
        }
        other => {
            warn!("Upload rejected: {}", other);
            ApiResponse::bad_request(&other.to_string())
        }
    }
}

#[post("/api/upload")]
pub async fn upload_single_handler(
    _admin: AdminSession,
    mut payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let file = match stage_single(&mut payload, "image", &UploadPolicy::default()).await {
        Ok(file) => file,
        Err(rejection) => return rejection_response(rejection),
    };

    match data.media.upload(file).await {
        Ok(media) => ApiResponse::success_with_message(media, "Image uploaded successfully"),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[post("/api/upload/multiple")]
pub async fn upload_many_handler(
    _admin: AdminSession,
    mut payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let files = match stage_files(&mut payload, "images", &UploadPolicy::default()).await {
        Ok(files) if files.is_empty() => {
            return rejection_response(UploadRejection::Missing);
        }
        Ok(files) => files,
        Err(rejection) => return rejection_response(rejection),
    };

    match data.media.upload_many(files).await {
        Ok(media) => ApiResponse::success_with_message(media, "Images uploaded successfully"),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[delete("/api/upload/{public_id:.*}")]
pub async fn delete_media_handler(
    _admin: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.media.delete(&path.into_inner()).await {
        Ok(()) => ApiResponse::message("Image deleted successfully"),
        Err(e) => ApiResponse::from_content_error(e),
    }
}
