//! User entity, role enumeration, and shared profile DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Closed set of account roles. The role is assigned at creation and is the
/// sole authorization signal; the only cross-role rule is that admins bypass
/// ownership checks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema, Hash,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Student,
    Instructor,
    Portfolio,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Student => "student",
            UserRole::Instructor => "instructor",
            UserRole::Portfolio => "portfolio",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(UserRole::Admin),
            "student" => Some(UserRole::Student),
            "instructor" => Some(UserRole::Instructor),
            "portfolio" => Some(UserRole::Portfolio),
            _ => None,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user as stored, minus the password hash. Query projections for this
/// struct must never select the `password` column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub phone_number: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// The user object returned from login/register responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: Uuid,
    pub email: String,
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
        }
    }
}

/// Profile update. The password is deliberately absent: profile saves must
/// never touch the stored hash.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileDto {
    #[validate(length(min = 1))]
    pub first_name: Option<String>,
    #[validate(length(min = 1))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordDto {
    #[validate(length(min = 1))]
    pub current_password: String,
    #[validate(length(min = 8))]
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_roundtrip() {
        for role in [
            UserRole::Admin,
            UserRole::Student,
            UserRole::Instructor,
            UserRole::Portfolio,
        ] {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(UserRole::parse("teacher"), None);
        assert_eq!(UserRole::parse(""), None);
        assert_eq!(UserRole::parse("Admin"), None);
    }

    #[test]
    fn test_role_serializes_as_lowercase_string() {
        assert_eq!(
            serde_json::to_string(&UserRole::Instructor).unwrap(),
            "\"instructor\""
        );
    }

    #[test]
    fn test_user_serializes_camel_case_without_password() {
        let user = User {
            id: Uuid::new_v4(),
            email: "a@b.com".to_string(),
            username: Some("ab".to_string()),
            first_name: "Ada".to_string(),
            last_name: "Byron".to_string(),
            role: UserRole::Student,
            phone_number: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"firstName\":\"Ada\""));
        assert!(json.contains("\"role\":\"student\""));
        assert!(!json.contains("password"));
    }

    #[test]
    fn test_change_password_dto_validation() {
        use validator::Validate;

        let ok = ChangePasswordDto {
            current_password: "old".to_string(),
            new_password: "longenough1".to_string(),
        };
        assert!(ok.validate().is_ok());

        let short = ChangePasswordDto {
            current_password: "old".to_string(),
            new_password: "short".to_string(),
        };
        assert!(short.validate().is_err());
    }
}
