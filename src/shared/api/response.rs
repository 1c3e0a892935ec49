// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use tracing::error;

use crate::shared::error::ContentError;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub limit: u64,
}

impl Pagination {
    pub fn new(total: u64, current_page: u64, limit: u64) -> Self {
        let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };
        Self {
            total,
            total_pages,
            current_page,
            limit,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data: Some(data),
            message: None,
            pagination: None,
        })
    }

    pub fn success_with_message(data: T, message: &str) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data: Some(data),
            message: Some(message.to_string()),
            pagination: None,
        })
    }

    pub fn created(data: T) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            success: true,
            data: Some(data),
            message: None,
            pagination: None,
        })
    }

    pub fn paginated(data: T, pagination: Pagination) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data: Some(data),
            message: None,
            pagination: Some(pagination),
        })
    }
}

impl ApiResponse<()> {
    pub fn message(message: &str) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse::<()> {
            success: true,
            data: None,
            message: Some(message.to_string()),
            pagination: None,
        })
    }

    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            data: None,
            message: Some(message.to_string()),
            pagination: None,
        })
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, message)
    }

    pub fn conflict(message: &str) -> HttpResponse {
        Self::error(StatusCode::CONFLICT, message)
    }

    pub fn upstream_error(message: &str) -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "An unexpected error occurred",
        )
    }

    /// Maps a service failure onto the envelope. Store failures are logged and
    /// hidden behind the generic 500 message.
    pub fn from_content_error(err: ContentError) -> HttpResponse {
        match err {
            ContentError::Validation(msg) => Self::bad_request(&msg),
            ContentError::NotFound(msg) => Self::not_found(&msg),
            ContentError::Conflict(msg) => Self::conflict(&msg),
            ContentError::Upstream(msg) => {
                error!("Upstream failure: {}", msg);
                Self::upstream_error(&msg)
            }
            ContentError::Repository(msg) => {
                error!("Repository failure: {}", msg);
                Self::internal_error()
            }
        }
    }
}
