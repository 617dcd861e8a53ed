use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application error taxonomy.
///
/// Access-control failures (`NoToken`, `InvalidToken`, `Unauthenticated`,
/// `Forbidden`, `AdminRequired`, `InvalidCredentials`) carry the exact status
/// and body the API has always produced, so they are not normalized across
/// each other. Handler-level failures render with a `success: false` flag.
#[derive(Debug)]
pub enum AppError {
    /// Authorization header missing or not `Bearer <token>`.
    NoToken,
    /// Token failed verification (malformed, bad signature, or expired).
    InvalidToken,
    /// No authenticated identity present at the authorization step.
    Unauthenticated,
    /// Unknown email or wrong password at login.
    InvalidCredentials,
    /// Caller's role is not allowed, or an ownership check failed.
    Forbidden(String),
    /// Non-admin caller on an admin-gated route.
    AdminRequired,
    NotFound(String),
    BadRequest(String),
    Internal(anyhow::Error),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::Internal(err.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NoToken | Self::Unauthenticated | Self::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            Self::InvalidToken | Self::Forbidden(_) | Self::AdminRequired => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            Self::NoToken => json!({ "message": "No token provided" }),
            Self::InvalidToken => json!({ "message": "Invalid token" }),
            Self::Unauthenticated => json!({ "message": "Unauthorized" }),
            Self::InvalidCredentials => json!({ "message": "Invalid credentials" }),
            Self::Forbidden(msg) => json!({ "message": msg }),
            Self::AdminRequired => {
                json!({ "success": false, "message": "Admin access required" })
            }
            Self::NotFound(msg) | Self::BadRequest(msg) => {
                json!({ "success": false, "message": msg })
            }
            Self::Internal(err) => {
                // Details go to the operator log, never to the client.
                tracing::error!(error = ?err, "Internal error");
                json!({ "success": false, "message": "Something went wrong" })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::internal(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_error_statuses() {
        assert_eq!(AppError::NoToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::InvalidToken.status(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::Unauthenticated.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::Forbidden("Forbidden".to_string()).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(AppError::AdminRequired.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_handler_error_statuses() {
        assert_eq!(
            AppError::InvalidCredentials.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::not_found("Course not found").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::bad_request("Invalid complaint type").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
