use std::sync::Arc;

use actix_web::web;

use crate::auth::adapter::incoming::web::extractors::auth::TokenProviderData;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
        issuer: JwtConfig::DEFAULT_ISSUER.to_string(),
        session_ttl_secs: 86_400,
    })
}

/// Token provider registered the way `main` registers it.
pub fn token_provider_data() -> TokenProviderData {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(test_jwt_service());
    web::Data::new(provider)
}

pub fn admin_token() -> String {
    test_jwt_service()
        .issue_admin_token()
        .expect("test token")
        .token
}
