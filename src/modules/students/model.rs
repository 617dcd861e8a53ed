//! Student-facing response shapes. Dashboard rows are narrow projections
//! rather than full entities.

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::complaints::model::ComplaintStatus;
use crate::modules::users::model::User;

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentProfileResponse {
    pub success: bool,
    pub student: User,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateProfileResponse {
    pub success: bool,
    pub message: String,
    pub student: User,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PasswordChangeResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCourse {
    pub course_id: Uuid,
    pub course_title: String,
    pub course_code: String,
    pub course_status: String,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardComplaint {
    pub complaint_id: Uuid,
    pub description: String,
    pub status: ComplaintStatus,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDashboard {
    pub total_courses: i64,
    pub total_complaints: i64,
    pub courses: Vec<DashboardCourse>,
    pub complaints: Vec<DashboardComplaint>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDashboardResponse {
    pub success: bool,
    pub dashboard_data: StudentDashboard,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentStatistics {
    pub total_courses: i64,
    pub completed_courses: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentStatisticsResponse {
    pub success: bool,
    pub statistics: StudentStatistics,
}
