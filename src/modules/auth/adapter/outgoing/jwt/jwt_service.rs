use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use super::jwt_config::JwtConfig;
use crate::auth::application::domain::entities::{
    check_session_window, AdminSession, IssuedToken, ADMIN_ROLE,
};
use crate::auth::application::ports::outgoing::token_provider::{
    AdminClaims, TokenError, TokenProvider,
};

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

fn timestamp(secs: i64) -> Result<DateTime<Utc>, TokenError> {
    Utc.timestamp_opt(secs, 0)
        .single()
        .ok_or(TokenError::MalformedToken)
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    pub fn issue_admin_token_at(&self, issued_at: DateTime<Utc>) -> Result<IssuedToken, TokenError> {
        let iat = issued_at.timestamp();
        let claims = AdminClaims {
            role: ADMIN_ROLE.to_string(),
            iat,
            exp: iat + self.config.session_ttl_secs,
            iss: self.config.issuer.clone(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))?;

        Ok(IssuedToken {
            token,
            issued_at: timestamp(claims.iat)?,
            expires_at: timestamp(claims.exp)?,
        })
    }

    /// Signature and issuer are checked by jsonwebtoken; the 24h window is
    /// checked against `now` so expiry does not depend on the `exp` claim.
    pub fn verify_admin_token_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<AdminSession, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["iat", "iss"]);
        validation.set_issuer(&[self.config.issuer.as_str()]);

        let decoded =
            decode::<AdminClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::InvalidSignature => {
                        tracing::warn!("Admin token rejected: invalid signature");
                        TokenError::InvalidSignature
                    }
                    _ => {
                        tracing::warn!("Admin token rejected: {}", e);
                        TokenError::MalformedToken
                    }
                }
            })?;

        let claims = decoded.claims;
        if claims.role != ADMIN_ROLE {
            return Err(TokenError::InvalidRole);
        }

        check_session_window(claims.iat, now.timestamp(), self.config.session_ttl_secs)?;

        Ok(AdminSession {
            role: claims.role,
            issued_at: timestamp(claims.iat)?,
            expires_at: timestamp(claims.iat + self.config.session_ttl_secs)?,
        })
    }
}

impl TokenProvider for JwtTokenService {
    fn issue_admin_token(&self) -> Result<IssuedToken, TokenError> {
        self.issue_admin_token_at(Utc::now())
    }

    fn verify_admin_token(&self, token: &str) -> Result<AdminSession, TokenError> {
        self.verify_admin_token_at(token, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
    use chrono::Duration;

    fn config(secret: &str) -> JwtConfig {
        JwtConfig {
            secret_key: secret.to_string(),
            issuer: "portfolio-cms".to_string(),
            session_ttl_secs: 86_400,
        }
    }

    fn service() -> JwtTokenService {
        JwtTokenService::new(config("test_secret_key_for_testing_purposes_only"))
    }

    #[test]
    fn issued_token_round_trips_into_session() {
        let svc = service();
        let issued = svc.issue_admin_token().unwrap();

        let session = svc.verify_admin_token(&issued.token).unwrap();
        assert_eq!(session.role, "admin");
        assert_eq!(session.issued_at, issued.issued_at);
        assert_eq!(session.expires_at - session.issued_at, Duration::hours(24));
    }

    #[test]
    fn expiry_boundary_is_24_hours_after_issuance() {
        let svc = service();
        let t = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let token = svc.issue_admin_token_at(t).unwrap().token;

        let just_before = t + Duration::hours(24) - Duration::seconds(1);
        let just_after = t + Duration::hours(24) + Duration::seconds(1);

        assert!(svc.verify_admin_token_at(&token, just_before).is_ok());
        assert_eq!(
            svc.verify_admin_token_at(&token, just_after),
            Err(TokenError::SessionExpired)
        );
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let other = JwtTokenService::new(config("another_secret_key_that_is_long_enough"));
        let token = other.issue_admin_token().unwrap().token;

        assert_eq!(
            service().verify_admin_token(&token),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn tampered_role_is_rejected() {
        let svc = service();
        let token = svc.issue_admin_token().unwrap().token;

        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        let payload = URL_SAFE_NO_PAD.decode(&parts[1]).unwrap();
        let mut claims: serde_json::Value = serde_json::from_slice(&payload).unwrap();
        claims["role"] = serde_json::json!("editor");
        parts[1] = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims).unwrap());

        assert_eq!(
            svc.verify_admin_token(&parts.join(".")),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn garbage_is_malformed() {
        assert_eq!(
            service().verify_admin_token("not-a-jwt"),
            Err(TokenError::MalformedToken)
        );
    }

    #[test]
    fn foreign_issuer_is_rejected() {
        let mut foreign = config("test_secret_key_for_testing_purposes_only");
        foreign.issuer = "someone-else".into();
        let token = JwtTokenService::new(foreign)
            .issue_admin_token()
            .unwrap()
            .token;

        assert_eq!(
            service().verify_admin_token(&token),
            Err(TokenError::MalformedToken)
        );
    }
}
