use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::users::model::{UserRole, UserSummary};

/// JWT claims. `sub` is the user id; the role travels in the token so role
/// gates never need a database round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: UserRole,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub username: Option<String>,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    /// Validated against the role set in the service so an unknown label
    /// produces "Invalid role specified" rather than a serde error.
    pub role: String,
    // Optional portfolio seed; when any of these are present an unpublished
    // portfolio is created alongside the account.
    pub portfolio_url: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
}

/// Body of successful login/register responses. Never carries the password
/// or its hash.
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserSummary,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_role_roundtrip() {
        let claims = Claims {
            sub: "u1".to_string(),
            role: UserRole::Portfolio,
            iat: 1,
            exp: 2,
        };
        let json = serde_json::to_string(&claims).unwrap();
        assert!(json.contains("\"role\":\"portfolio\""));

        let back: Claims = serde_json::from_str(&json).unwrap();
        assert_eq!(back.role, UserRole::Portfolio);
        assert_eq!(back.sub, "u1");
    }

    #[test]
    fn test_register_request_accepts_camel_case() {
        let json = r#"{
            "email": "a@b.com",
            "password": "secret123",
            "firstName": "Ada",
            "lastName": "Byron",
            "role": "student",
            "portfolioUrl": "https://ada.dev"
        }"#;
        let dto: RegisterRequest = serde_json::from_str(json).unwrap();
        assert_eq!(dto.first_name, "Ada");
        assert_eq!(dto.portfolio_url.as_deref(), Some("https://ada.dev"));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_login_request_validation() {
        let dto = LoginRequest {
            email: "not-an-email".to_string(),
            password: "x".to_string(),
        };
        assert!(dto.validate().is_err());
    }
}
