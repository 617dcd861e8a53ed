use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::students::model::PasswordChangeResponse;
use crate::modules::users::model::ChangePasswordDto;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{
    ComplaintStatisticsResponse, InstructorDashboardResponse, InstructorProfileResponse,
};
use super::service::InstructorService;

/// Get the calling instructor's profile
#[utoipa::path(
    get,
    path = "/api/instructor/profile",
    responses(
        (status = 200, description = "Instructor profile", body = InstructorProfileResponse),
        (status = 404, description = "Instructor not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Instructors"
)]
#[instrument(skip(state, auth))]
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<InstructorProfileResponse>, AppError> {
    let instructor = InstructorService::get_profile(&state.db, auth.user_id()).await?;
    Ok(Json(InstructorProfileResponse {
        success: true,
        instructor,
    }))
}

/// Instructor dashboard: own courses with enrollment counts
#[utoipa::path(
    get,
    path = "/api/instructor/dashboard",
    responses(
        (status = 200, description = "Dashboard data", body = InstructorDashboardResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Instructors"
)]
#[instrument(skip(state, auth))]
pub async fn dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<InstructorDashboardResponse>, AppError> {
    let dashboard_data = InstructorService::dashboard(&state.db, auth.user_id()).await?;
    Ok(Json(InstructorDashboardResponse {
        success: true,
        dashboard_data,
    }))
}

/// Complaint queue statistics
#[utoipa::path(
    get,
    path = "/api/instructor/statistics",
    responses(
        (status = 200, description = "Complaint statistics", body = ComplaintStatisticsResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Instructors"
)]
#[instrument(skip(state))]
pub async fn statistics(
    State(state): State<AppState>,
) -> Result<Json<ComplaintStatisticsResponse>, AppError> {
    let statistics = InstructorService::complaint_statistics(&state.db).await?;
    Ok(Json(ComplaintStatisticsResponse {
        success: true,
        statistics,
    }))
}

/// Change the calling instructor's password
#[utoipa::path(
    put,
    path = "/api/instructor/change-password",
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password updated", body = PasswordChangeResponse),
        (status = 400, description = "Current password is incorrect", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Instructors"
)]
#[instrument(skip(state, auth, dto))]
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(dto): ValidatedJson<ChangePasswordDto>,
) -> Result<Json<PasswordChangeResponse>, AppError> {
    InstructorService::change_password(&state.db, auth.user_id(), dto).await?;
    Ok(Json(PasswordChangeResponse {
        success: true,
        message: "Password updated successfully".to_string(),
    }))
}
