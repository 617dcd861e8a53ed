//! Course entity, enrollment projections, and playback progress DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// One content unit inside a course. Stored as JSONB on the course row; the
/// module list is only ever read or replaced as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseModule {
    pub title: String,
    pub resource_link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub course_code: String,
    pub capacity: i32,
    pub instructor_id: Uuid,
    pub status: String,
    #[schema(value_type = Vec<CourseModule>)]
    pub modules: Json<Vec<CourseModule>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// A course as the catalog shows it to a student, with the caller's own
/// enrollment state folded in.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseWithEnrollment {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub course: Course,
    pub is_enrolled: bool,
}

/// A course with its instructor's details joined in, for admin listings.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseWithInstructor {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub course: Course,
    pub instructor_first_name: String,
    pub instructor_last_name: String,
    pub instructor_email: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseDto {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub course_code: String,
    #[validate(range(min = 1))]
    pub capacity: i32,
    pub modules: Vec<CourseModule>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentDto {
    pub course_id: Uuid,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgressDto {
    pub course_id: Uuid,
    #[validate(range(min = 0, max = 100))]
    pub progress: i32,
    pub last_played_module: Option<String>,
}

/// One student's progress through one course.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseProgress {
    pub course_id: Uuid,
    pub student_id: Uuid,
    pub progress: i32,
    pub last_played_module: Option<String>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// The playable content of a course, without roster or progress data.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseContent {
    pub title: String,
    pub description: String,
    pub course_code: String,
    #[schema(value_type = Vec<CourseModule>)]
    pub modules: Json<Vec<CourseModule>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PlayCourseResponse {
    pub success: bool,
    pub message: String,
    pub course: CourseContent,
}

/// Body of enroll/withdraw/create confirmations.
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseActionResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_course_module_wire_format() {
        let module = CourseModule {
            title: "Intro".to_string(),
            resource_link: "https://example.com/intro.mp4".to_string(),
        };
        let json = serde_json::to_string(&module).unwrap();
        assert!(json.contains("\"resourceLink\""));
    }

    #[test]
    fn test_progress_bounds_validated() {
        let mut dto = UpdateProgressDto {
            course_id: Uuid::new_v4(),
            progress: 50,
            last_played_module: None,
        };
        assert!(dto.validate().is_ok());

        dto.progress = 101;
        assert!(dto.validate().is_err());

        dto.progress = -1;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_course_dto_accepts_camel_case() {
        let json = r#"{
            "title": "Rust 101",
            "description": "Systems programming",
            "courseCode": "RS101",
            "capacity": 30,
            "modules": [{"title": "Ownership", "resourceLink": "https://x.test/1"}]
        }"#;
        let dto: CreateCourseDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.course_code, "RS101");
        assert_eq!(dto.modules.len(), 1);
        assert!(dto.validate().is_ok());
    }
}
