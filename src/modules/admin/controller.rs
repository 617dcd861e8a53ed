use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::MessageResponse;
use crate::modules::courses::model::CourseWithInstructor;
use crate::modules::portfolios::model::Portfolio;
use crate::modules::users::model::{User, UserRole, UserSummary};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateAccountDto, ManageEnrollmentDto};
use super::service::AdminService;

#[derive(serde::Serialize, utoipa::ToSchema)]
pub struct CreatedAccountResponse {
    pub message: String,
    pub user: UserSummary,
}

/// Create a new admin account
#[utoipa::path(
    post,
    path = "/api/admin/create",
    request_body = CreateAccountDto,
    responses(
        (status = 201, description = "Admin created", body = CreatedAccountResponse),
        (status = 400, description = "User already exists", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state, dto))]
pub async fn create_admin(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateAccountDto>,
) -> Result<(StatusCode, Json<CreatedAccountResponse>), AppError> {
    let user = AdminService::create_account(&state.db, dto, UserRole::Admin).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedAccountResponse {
            message: "Admin user created successfully".to_string(),
            user: user.into(),
        }),
    ))
}

/// List all students
#[utoipa::path(
    get,
    path = "/api/admin/students",
    responses((status = 200, description = "All students", body = Vec<User>)),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn list_students(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let students = AdminService::list_students(&state.db).await?;
    Ok(Json(students))
}

/// Create a new student account
#[utoipa::path(
    post,
    path = "/api/admin/students",
    request_body = CreateAccountDto,
    responses(
        (status = 201, description = "Student created", body = CreatedAccountResponse),
        (status = 400, description = "User already exists", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state, dto))]
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateAccountDto>,
) -> Result<(StatusCode, Json<CreatedAccountResponse>), AppError> {
    let user = AdminService::create_account(&state.db, dto, UserRole::Student).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedAccountResponse {
            message: "Student created successfully".to_string(),
            user: user.into(),
        }),
    ))
}

/// Get one student's profile
#[utoipa::path(
    get,
    path = "/api/admin/students/{id}",
    params(("id" = Uuid, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student profile", body = User),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn get_student_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, AppError> {
    let student = AdminService::get_student_profile(&state.db, id).await?;
    Ok(Json(student))
}

/// Delete a student
#[utoipa::path(
    delete,
    path = "/api/admin/students/{id}",
    params(("id" = Uuid, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student deleted", body = MessageResponse),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    AdminService::delete_student(&state.db, id).await?;
    Ok(Json(MessageResponse {
        message: "Student deleted successfully".to_string(),
    }))
}

/// List all instructors
#[utoipa::path(
    get,
    path = "/api/admin/instructors",
    responses(
        (status = 200, description = "All instructors", body = Vec<User>),
        (status = 404, description = "No instructors found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn list_instructors(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let instructors = AdminService::list_instructors(&state.db).await?;
    Ok(Json(instructors))
}

/// Create a new instructor account
#[utoipa::path(
    post,
    path = "/api/admin/instructors",
    request_body = CreateAccountDto,
    responses(
        (status = 201, description = "Instructor created", body = CreatedAccountResponse),
        (status = 400, description = "User already exists", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state, dto))]
pub async fn create_instructor(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateAccountDto>,
) -> Result<(StatusCode, Json<CreatedAccountResponse>), AppError> {
    let user = AdminService::create_account(&state.db, dto, UserRole::Instructor).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedAccountResponse {
            message: "Instructor created successfully".to_string(),
            user: user.into(),
        }),
    ))
}

/// Delete an instructor
#[utoipa::path(
    delete,
    path = "/api/admin/instructors/{id}",
    params(("id" = Uuid, Path, description = "Instructor id")),
    responses(
        (status = 200, description = "Instructor deleted", body = MessageResponse),
        (status = 404, description = "Instructor not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn delete_instructor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    AdminService::delete_instructor(&state.db, id).await?;
    Ok(Json(MessageResponse {
        message: "Instructor deleted successfully".to_string(),
    }))
}

/// List all courses with instructor details
#[utoipa::path(
    get,
    path = "/api/admin/courses",
    responses(
        (status = 200, description = "All courses", body = Vec<CourseWithInstructor>),
        (status = 404, description = "No courses found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseWithInstructor>>, AppError> {
    let courses = AdminService::list_courses(&state.db).await?;
    Ok(Json(courses))
}

/// Enroll a student in a course on their behalf
#[utoipa::path(
    post,
    path = "/api/admin/assign-course",
    request_body = ManageEnrollmentDto,
    responses(
        (status = 200, description = "Course assigned", body = MessageResponse),
        (status = 404, description = "Student or course not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state, dto))]
pub async fn assign_course(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<ManageEnrollmentDto>,
) -> Result<Json<MessageResponse>, AppError> {
    AdminService::assign_course(&state.db, dto).await?;
    Ok(Json(MessageResponse {
        message: "Course assigned successfully".to_string(),
    }))
}

/// Withdraw a student from a course on their behalf
#[utoipa::path(
    post,
    path = "/api/admin/remove-course",
    request_body = ManageEnrollmentDto,
    responses(
        (status = 200, description = "Course removed", body = MessageResponse),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state, dto))]
pub async fn remove_course(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<ManageEnrollmentDto>,
) -> Result<Json<MessageResponse>, AppError> {
    AdminService::remove_course(&state.db, dto).await?;
    Ok(Json(MessageResponse {
        message: "Course removed successfully".to_string(),
    }))
}

/// List all published portfolios
#[utoipa::path(
    get,
    path = "/api/admin/portfolios",
    responses((status = 200, description = "Published portfolios", body = Vec<Portfolio>)),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn list_portfolios(
    State(state): State<AppState>,
) -> Result<Json<Vec<Portfolio>>, AppError> {
    let portfolios = AdminService::list_portfolios(&state.db).await?;
    Ok(Json(portfolios))
}
