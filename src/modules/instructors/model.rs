use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::users::model::User;

#[derive(Debug, Serialize, ToSchema)]
pub struct InstructorProfileResponse {
    pub success: bool,
    pub instructor: User,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InstructorCourseSummary {
    pub course_id: Uuid,
    pub course_title: String,
    pub enrolled_students: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InstructorDashboard {
    pub total_courses: i64,
    pub course_data: Vec<InstructorCourseSummary>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InstructorDashboardResponse {
    pub success: bool,
    pub dashboard_data: InstructorDashboard,
}

/// Complaint workload counts across the whole queue; complaints are not
/// assigned to individual instructors.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintStatistics {
    pub total_complaints: i64,
    pub resolved_complaints: i64,
    pub pending_complaints: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ComplaintStatisticsResponse {
    pub success: bool,
    pub statistics: ComplaintStatistics,
}
