//! Session-token verification.
//!
//! The auth front end issues HS256 session tokens signed with a shared
//! secret. [`TokenVerifier`] is constructed once at startup and injected as
//! app data, so handlers never touch the secret themselves. The
//! [`FromRequest`] impl for [`AuthenticatedUser`] runs before any handler
//! body, which keeps unauthenticated requests away from the database.

use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest, HttpResponse, ResponseError, web};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::auth::AuthenticatedUser;

/// Claims carried by a session token. `status` holds the role string.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub status: String,
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum AuthenticationError {
    #[error("Token not found")]
    TokenNotFound,
}

impl ResponseError for AuthenticationError {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::Unauthorized().json(serde_json::json!({ "message": "Token not found" }))
    }
}

/// Decodes bearer session tokens using the configured shared secret.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Resolves the principal from the `Authorization: Bearer` header.
    /// Returns `None` for a missing, malformed, or expired token.
    pub fn verify(&self, req: &HttpRequest) -> Option<AuthenticatedUser> {
        let header = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
        let token = header.strip_prefix("Bearer ")?;

        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).ok()?;
        let id = data.claims.sub.parse().ok()?;

        Some(AuthenticatedUser {
            id,
            role: data.claims.status.as_str().into(),
        })
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = AuthenticationError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = req
            .app_data::<web::Data<TokenVerifier>>()
            .and_then(|verifier| verifier.verify(req));

        ready(user.ok_or(AuthenticationError::TokenNotFound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserRole;
    use actix_web::test::TestRequest;
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};

    const SECRET: &str = "test-secret";

    fn token(sub: &str, status: &str, exp: i64) -> String {
        let claims = Claims {
            sub: sub.to_string(),
            status: status.to_string(),
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    fn request_with(header_value: &str) -> HttpRequest {
        TestRequest::default()
            .insert_header((header::AUTHORIZATION, header_value.to_string()))
            .to_http_request()
    }

    #[test]
    fn verifies_valid_token() {
        let verifier = TokenVerifier::new(SECRET);
        let exp = Utc::now().timestamp() + 3600;
        let req = request_with(&format!("Bearer {}", token("42", "ADMIN", exp)));

        let user = verifier.verify(&req).unwrap();
        assert_eq!(user.id, 42);
        assert_eq!(user.role, UserRole::Admin);
    }

    #[test]
    fn unknown_status_maps_to_standard_role() {
        let verifier = TokenVerifier::new(SECRET);
        let exp = Utc::now().timestamp() + 3600;
        let req = request_with(&format!("Bearer {}", token("7", "whatever", exp)));

        let user = verifier.verify(&req).unwrap();
        assert_eq!(user.role, UserRole::User);
    }

    #[test]
    fn rejects_missing_header() {
        let verifier = TokenVerifier::new(SECRET);
        let req = TestRequest::default().to_http_request();

        assert!(verifier.verify(&req).is_none());
    }

    #[test]
    fn rejects_garbage_token() {
        let verifier = TokenVerifier::new(SECRET);
        let req = request_with("Bearer not-a-jwt");

        assert!(verifier.verify(&req).is_none());
    }

    #[test]
    fn rejects_expired_token() {
        let verifier = TokenVerifier::new(SECRET);
        let exp = Utc::now().timestamp() - 3600;
        let req = request_with(&format!("Bearer {}", token("42", "USER", exp)));

        assert!(verifier.verify(&req).is_none());
    }

    #[test]
    fn rejects_non_numeric_subject() {
        let verifier = TokenVerifier::new(SECRET);
        let exp = Utc::now().timestamp() + 3600;
        let req = request_with(&format!("Bearer {}", token("abc", "USER", exp)));

        assert!(verifier.verify(&req).is_none());
    }
}
