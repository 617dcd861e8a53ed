//! Complaint entity and DTOs. Wire casing follows the original data model:
//! type and status values travel capitalized ("Enroll", "Pending") while
//! they are stored lowercase in their Postgres enums.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "complaint_type", rename_all = "lowercase")]
pub enum ComplaintType {
    Enroll,
    Withdraw,
    Completion,
    Other,
}

impl ComplaintType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Enroll" => Some(ComplaintType::Enroll),
            "Withdraw" => Some(ComplaintType::Withdraw),
            "Completion" => Some(ComplaintType::Completion),
            "Other" => Some(ComplaintType::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "complaint_status", rename_all = "lowercase")]
pub enum ComplaintStatus {
    Pending,
    Resolved,
}

impl ComplaintStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(ComplaintStatus::Pending),
            "Resolved" => Some(ComplaintStatus::Resolved),
            _ => None,
        }
    }
}

/// Name snapshot taken when the complaint is filed, so listings do not
/// change retroactively if the student renames their account.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDetails {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: Uuid,
    pub student_id: Uuid,
    pub description: String,
    #[serde(rename = "type")]
    pub complaint_type: ComplaintType,
    pub status: ComplaintStatus,
    #[sqlx(flatten)]
    pub student_details: StudentDetails,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateComplaintDto {
    pub description: String,
    /// Validated in the service so unknown labels produce
    /// "Invalid complaint type".
    pub r#type: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateComplaintDto {
    pub description: Option<String>,
    pub status: Option<String>,
    pub r#type: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct PaginationQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ComplaintFilterQuery {
    pub status: Option<String>,
    pub r#type: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_complaints: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedComplaints {
    pub success: bool,
    pub complaints: Vec<Complaint>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ComplaintResponse {
    pub success: bool,
    pub complaint: Complaint,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ComplaintListResponse {
    pub success: bool,
    pub complaints: Vec<Complaint>,
}

/// Deletion echo for the student-owned delete route.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletedComplaintResponse {
    pub success: bool,
    pub message: String,
    pub deleted_complaint: Complaint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_parses_capitalized_labels_only() {
        assert_eq!(ComplaintType::parse("Enroll"), Some(ComplaintType::Enroll));
        assert_eq!(ComplaintType::parse("Other"), Some(ComplaintType::Other));
        assert_eq!(ComplaintType::parse("enroll"), None);
        assert_eq!(ComplaintType::parse("All"), None);
        assert_eq!(ComplaintType::parse(""), None);
    }

    #[test]
    fn test_status_serializes_capitalized() {
        assert_eq!(
            serde_json::to_string(&ComplaintStatus::Pending).unwrap(),
            "\"Pending\""
        );
    }

    #[test]
    fn test_complaint_wire_format_uses_type_key() {
        let complaint = Complaint {
            id: Uuid::new_v4(),
            student_id: Uuid::new_v4(),
            description: "Cannot enroll".to_string(),
            complaint_type: ComplaintType::Enroll,
            status: ComplaintStatus::Pending,
            student_details: StudentDetails {
                first_name: "Ada".to_string(),
                last_name: "Byron".to_string(),
            },
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        let json = serde_json::to_string(&complaint).unwrap();
        assert!(json.contains("\"type\":\"Enroll\""));
        assert!(json.contains("\"studentDetails\":{\"firstName\":\"Ada\""));
    }
}
