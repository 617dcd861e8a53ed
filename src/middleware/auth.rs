//! Authentication: bearer-token extraction and verification.
//!
//! The [`authenticate`] middleware is the first half of the access-control
//! gate. It resolves the caller to an [`Identity`] and attaches it to the
//! request; role and ownership checks (`middleware::role`) run after it and
//! read that Identity back. Handlers take the [`AuthUser`] extractor.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// The authenticated principal for one request, reconstructed from a
/// verified token. Lives only in the request's extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
    pub role: UserRole,
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(AppError::NoToken)
}

fn identity_from_token(token: &str, jwt_config: &JwtConfig) -> Result<Identity, AppError> {
    let claims = verify_token(token, jwt_config).map_err(|kind| {
        tracing::warn!(?kind, "Token verification failed");
        AppError::InvalidToken
    })?;

    // A sub that is not a UUID cannot have been issued by us.
    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::InvalidToken)?;

    Ok(Identity {
        user_id,
        role: claims.role,
    })
}

/// Layer-style authentication. Rejects before any handler or persistence
/// work: missing/malformed header → 401 "No token provided"; verification
/// failure → 403 "Invalid token".
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(req.headers())?;
    let identity = identity_from_token(token, &state.jwt_config)?;

    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}

/// Extractor giving handlers the caller's [`Identity`].
///
/// Reuses the Identity attached by [`authenticate`] when the route is
/// layered with it, and performs the same header-verify sequence itself
/// otherwise, so handlers behave identically either way.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

impl AuthUser {
    pub fn user_id(&self) -> Uuid {
        self.0.user_id
    }

    pub fn role(&self) -> UserRole {
        self.0.role
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>() {
            return Ok(AuthUser(identity.clone()));
        }

        let token = bearer_token(&parts.headers)?;
        let identity = identity_from_token(token, &state.jwt_config)?;
        Ok(AuthUser(identity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::jwt::create_token;
    use axum::http::HeaderValue;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "middleware_test_secret".to_string(),
            token_expiry: 3600,
        }
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_missing_header_is_no_token() {
        let headers = HeaderMap::new();
        assert!(matches!(bearer_token(&headers), Err(AppError::NoToken)));
    }

    #[test]
    fn test_malformed_header_is_no_token() {
        for value in ["Basic abc", "Bearer", "bearer abc", "token"] {
            let headers = headers_with(value);
            assert!(
                matches!(bearer_token(&headers), Err(AppError::NoToken)),
                "header {:?} should be NoToken",
                value
            );
        }
    }

    #[test]
    fn test_bearer_token_extracted() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_identity_from_valid_token() {
        let config = test_config();
        let user_id = Uuid::new_v4();
        let token = create_token(user_id, UserRole::Instructor, &config).unwrap();

        let identity = identity_from_token(&token, &config).unwrap();
        assert_eq!(identity.user_id, user_id);
        assert_eq!(identity.role, UserRole::Instructor);
    }

    #[test]
    fn test_identity_from_garbage_token_is_invalid_token() {
        let config = test_config();
        assert!(matches!(
            identity_from_token("garbage", &config),
            Err(AppError::InvalidToken)
        ));
    }
}
