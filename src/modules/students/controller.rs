use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::model::{ChangePasswordDto, UpdateProfileDto};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{
    PasswordChangeResponse, StudentDashboardResponse, StudentProfileResponse,
    StudentStatisticsResponse, UpdateProfileResponse,
};
use super::service::StudentService;

/// Get the calling student's profile
#[utoipa::path(
    get,
    path = "/api/student/profile",
    responses(
        (status = 200, description = "Student profile", body = StudentProfileResponse),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
#[instrument(skip(state, auth))]
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<StudentProfileResponse>, AppError> {
    let student = StudentService::get_profile(&state.db, auth.user_id()).await?;
    Ok(Json(StudentProfileResponse {
        success: true,
        student,
    }))
}

/// Update the calling student's profile
#[utoipa::path(
    put,
    path = "/api/student/profile",
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UpdateProfileResponse),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
#[instrument(skip(state, auth, dto))]
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(dto): ValidatedJson<UpdateProfileDto>,
) -> Result<Json<UpdateProfileResponse>, AppError> {
    let student = StudentService::update_profile(&state.db, auth.user_id(), dto).await?;
    Ok(Json(UpdateProfileResponse {
        success: true,
        message: "Profile updated successfully".to_string(),
        student,
    }))
}

/// Change the calling student's password
#[utoipa::path(
    put,
    path = "/api/student/change-password",
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password updated", body = PasswordChangeResponse),
        (status = 400, description = "Current password is incorrect", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
#[instrument(skip(state, auth, dto))]
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(dto): ValidatedJson<ChangePasswordDto>,
) -> Result<Json<PasswordChangeResponse>, AppError> {
    StudentService::change_password(&state.db, auth.user_id(), dto).await?;
    Ok(Json(PasswordChangeResponse {
        success: true,
        message: "Password updated successfully".to_string(),
    }))
}

/// Student dashboard: enrolled courses and filed complaints
#[utoipa::path(
    get,
    path = "/api/student/dashboard",
    responses(
        (status = 200, description = "Dashboard data", body = StudentDashboardResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
#[instrument(skip(state, auth))]
pub async fn dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<StudentDashboardResponse>, AppError> {
    let dashboard_data = StudentService::dashboard(&state.db, auth.user_id()).await?;
    Ok(Json(StudentDashboardResponse {
        success: true,
        dashboard_data,
    }))
}

/// Student course statistics
#[utoipa::path(
    get,
    path = "/api/student/statistics",
    responses(
        (status = 200, description = "Course statistics", body = StudentStatisticsResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
#[instrument(skip(state, auth))]
pub async fn statistics(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<StudentStatisticsResponse>, AppError> {
    let statistics = StudentService::statistics(&state.db, auth.user_id()).await?;
    Ok(Json(StudentStatisticsResponse {
        success: true,
        statistics,
    }))
}
