use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::domain::entities::AdminSession;
use crate::auth::application::ports::outgoing::token_provider::{TokenError, TokenProvider};
use crate::shared::api::ApiResponse;

/// How the token provider is registered as app data.
pub type TokenProviderData = web::Data<Arc<dyn TokenProvider + Send + Sync>>;

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

/// Guards admin routes: a handler taking `AdminSession` only runs for a
/// request with a valid bearer credential.
impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let tokens = match req.app_data::<TokenProviderData>() {
            Some(service) => service,
            None => {
                tracing::error!("Token provider is not registered as app data");
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "Not authorized, no token",
                ))));
            }
        };

        match tokens.verify_admin_token(&token) {
            Ok(session) => ready(Ok(session)),
            Err(TokenError::SessionExpired) => ready(Err(create_api_error(
                ApiResponse::unauthorized("Session expired"),
            ))),
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "Not authorized, invalid token",
            )))),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
