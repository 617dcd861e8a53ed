//! Portfolio entity and DTOs. Experience, project, and education entries are
//! stored as JSONB documents; the flat string lists are text arrays.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub graduation_year: String,
    pub major: String,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: Uuid,
    pub user_id: Uuid,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub about: Option<String>,
    pub portfolio_url: Option<String>,
    pub skills: Vec<String>,
    #[schema(value_type = Vec<Experience>)]
    pub experience: Json<Vec<Experience>>,
    #[schema(value_type = Vec<Project>)]
    pub projects: Json<Vec<Project>>,
    #[schema(value_type = Vec<Education>)]
    pub education: Json<Vec<Education>>,
    pub patents_or_papers: Vec<String>,
    pub profile_links: Vec<String>,
    pub published: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePortfolioDto {
    pub user_id: Uuid,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub about: Option<String>,
    pub portfolio_url: Option<String>,
    pub skills: Option<Vec<String>>,
    pub experience: Option<Vec<Experience>>,
    pub projects: Option<Vec<Project>>,
    pub education: Option<Vec<Education>>,
    pub patents_or_papers: Option<Vec<String>>,
    pub profile_links: Option<Vec<String>>,
    /// Optional username claim applied to the owning user account.
    #[validate(length(min = 1))]
    pub username: Option<String>,
}

/// Partial update; the owner id comes from the path, not the body.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePortfolioDto {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub about: Option<String>,
    pub portfolio_url: Option<String>,
    pub skills: Option<Vec<String>>,
    pub experience: Option<Vec<Experience>>,
    pub projects: Option<Vec<Project>>,
    pub education: Option<Vec<Education>>,
    pub patents_or_papers: Option<Vec<String>>,
    pub profile_links: Option<Vec<String>>,
    pub published: Option<bool>,
    #[validate(length(min = 1))]
    pub username: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PortfolioResponse {
    pub message: String,
    pub portfolio: Portfolio,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub profile: Portfolio,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_wire_format() {
        let json = r#"{
            "title": "Engineer",
            "company": "Acme",
            "location": "Remote",
            "startDate": "2020-01",
            "description": "Built things"
        }"#;
        let experience: Experience = serde_json::from_str(json).unwrap();
        assert_eq!(experience.start_date, "2020-01");
        assert_eq!(experience.end_date, None);

        let back = serde_json::to_string(&experience).unwrap();
        assert!(back.contains("\"startDate\":\"2020-01\""));
    }

    #[test]
    fn test_update_dto_all_fields_optional() {
        let dto: UpdatePortfolioDto = serde_json::from_str("{}").unwrap();
        assert!(dto.published.is_none());
        assert!(dto.username.is_none());
    }
}
