//! Authentication extractor for the API.
//!
//! The API does not manage accounts itself: an external identity provider
//! issues signed bearer tokens whose `sub` claim is the caller's opaque user
//! id. [`RequireUser`] validates the token and hands the handler that id;
//! any failure (missing header, malformed header, bad signature, expired
//! token) rejects with 401 `Unauthenticated` before the body is touched.
//!
//! Read endpoints are public and simply omit the extractor.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{HeaderMap, request::Parts},
};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use shopsmith_core::UserId;

use crate::error::AppError;
use crate::state::AppState;

/// Token claims issued by the identity provider.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The opaque user id.
    pub sub: String,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

/// Extractor that requires an authenticated caller.
///
/// # Example
///
/// ```rust,ignore
/// async fn create(
///     RequireUser(user_id): RequireUser,
///     Json(body): Json<CreateStoreRequest>,
/// ) -> Result<impl IntoResponse, AppError> { ... }
/// ```
pub struct RequireUser(pub UserId);

impl<S> FromRequestParts<S> for RequireUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let token = bearer_token(&parts.headers).ok_or(AppError::Unauthenticated)?;
        let user_id = verify_token(token, &state.config().auth_secret)?;
        Ok(Self(user_id))
    }
}

/// Extract the bearer token from the Authorization header, if present.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get("authorization")?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}

/// Validate a token and extract the caller's user id.
///
/// # Errors
///
/// Returns `AppError::Unauthenticated` if the token is invalid or expired.
pub fn verify_token(token: &str, secret: &SecretString) -> Result<UserId, AppError> {
    let key = DecodingKey::from_secret(secret.expose_secret().as_bytes());
    let data = decode::<Claims>(token, &key, &Validation::default())
        .map_err(|_| AppError::Unauthenticated)?;
    Ok(UserId::new(data.claims.sub))
}

/// Mint a signed token for a user id, valid for `ttl_hours`.
///
/// Used by the CLI and the integration tests; production tokens come from
/// the identity provider.
///
/// # Errors
///
/// Returns `jsonwebtoken::errors::Error` if signing fails.
pub fn issue_token(
    user_id: &UserId,
    secret: &SecretString,
    ttl_hours: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: user_id.to_string(),
        exp: (Utc::now() + chrono::Duration::hours(ttl_hours)).timestamp(),
    };
    let key = EncodingKey::from_secret(secret.expose_secret().as_bytes());
    encode(&Header::default(), &claims, &key)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn secret() -> SecretString {
        SecretString::from("k9#mQ2$vX7!pL4@nR8^wZ5&tY1*uJ6(e")
    }

    #[test]
    fn test_token_round_trip() {
        let user_id = UserId::new("user_abc123");
        let token = issue_token(&user_id, &secret(), 1).unwrap();
        let verified = verify_token(&token, &secret()).unwrap();
        assert_eq!(verified, user_id);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = issue_token(&UserId::new("user_abc123"), &secret(), 1).unwrap();
        let other = SecretString::from("a3$Fq9!zW2@xC7#vB5^nM8&kL4*jH6(d");
        let result = verify_token(&token, &other);
        assert!(matches!(result, Err(AppError::Unauthenticated)));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let token = issue_token(&UserId::new("user_abc123"), &secret(), -1).unwrap();
        let result = verify_token(&token, &secret());
        assert!(matches!(result, Err(AppError::Unauthenticated)));
    }

    #[test]
    fn test_bearer_token_parsing() {
        let mut headers = HeaderMap::new();
        assert!(bearer_token(&headers).is_none());

        headers.insert("authorization", HeaderValue::from_static("Basic abc"));
        assert!(bearer_token(&headers).is_none());

        headers.insert("authorization", HeaderValue::from_static("Bearer "));
        assert!(bearer_token(&headers).is_none());

        headers.insert("authorization", HeaderValue::from_static("Bearer tok123"));
        assert_eq!(bearer_token(&headers), Some("tok123"));
    }
}
