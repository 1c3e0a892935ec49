// src/shared/api/error_handlers.rs
use actix_web::{
    dev::ServiceResponse,
    http::{header, StatusCode},
    middleware::{ErrorHandlerResponse, ErrorHandlers},
};

use crate::shared::api::ApiResponse;

/// Rewrites bare 404 and 5xx responses into the JSON envelope. Responses that
/// already carry a JSON body pass through untouched.
pub fn envelope_error_handlers<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new()
        .handler(StatusCode::NOT_FOUND, |res| {
            into_envelope(res, "Route not found")
        })
        .default_handler_server(|res| into_envelope(res, "An unexpected error occurred"))
}

fn into_envelope<B>(
    res: ServiceResponse<B>,
    message: &str,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let already_json = res
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/json"))
        .unwrap_or(false);

    if already_json {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    let status = res.status();
    let (req, _) = res.into_parts();
    let rewritten = ServiceResponse::new(req, ApiResponse::error(status, message));

    Ok(ErrorHandlerResponse::Response(rewritten.map_into_right_body()))
}
