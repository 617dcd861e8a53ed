use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{
    Course, CourseActionResponse, CourseProgress, CourseWithEnrollment, CreateCourseDto,
    EnrollmentDto, PlayCourseResponse, UpdateProgressDto,
};
use super::service::CourseService;

/// List all courses with the caller's enrollment status
#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "All courses", body = Vec<CourseWithEnrollment>),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, auth))]
pub async fn list_courses(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<CourseWithEnrollment>>, AppError> {
    let courses = CourseService::list_with_enrollment(&state.db, auth.user_id()).await?;
    Ok(Json(courses))
}

/// List courses the caller is enrolled in
#[utoipa::path(
    get,
    path = "/api/courses/enrolled",
    responses(
        (status = 200, description = "Enrolled courses", body = Vec<Course>),
        (status = 404, description = "No courses found for this student", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, auth))]
pub async fn list_enrolled_courses(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Course>>, AppError> {
    let courses = CourseService::list_enrolled(&state.db, auth.user_id()).await?;
    Ok(Json(courses))
}

/// Enroll in a course
#[utoipa::path(
    post,
    path = "/api/courses/enroll",
    request_body = EnrollmentDto,
    responses(
        (status = 200, description = "Enrolled", body = CourseActionResponse),
        (status = 400, description = "Already enrolled", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, auth))]
pub async fn enroll_in_course(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(dto): ValidatedJson<EnrollmentDto>,
) -> Result<Json<CourseActionResponse>, AppError> {
    CourseService::enroll(&state.db, auth.user_id(), dto.course_id).await?;
    Ok(Json(CourseActionResponse {
        success: true,
        message: "Successfully enrolled in the course".to_string(),
    }))
}

/// Withdraw from a course
#[utoipa::path(
    delete,
    path = "/api/courses/withdraw",
    request_body = EnrollmentDto,
    responses(
        (status = 200, description = "Withdrawn", body = CourseActionResponse),
        (status = 400, description = "Not enrolled", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, auth))]
pub async fn withdraw_from_course(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(dto): ValidatedJson<EnrollmentDto>,
) -> Result<Json<CourseActionResponse>, AppError> {
    CourseService::withdraw(&state.db, auth.user_id(), dto.course_id).await?;
    Ok(Json(CourseActionResponse {
        success: true,
        message: "Successfully withdrawn from the course".to_string(),
    }))
}

/// Create a course (instructors only)
#[utoipa::path(
    post,
    path = "/api/courses/create",
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Course created", body = Course),
        (status = 403, description = "Only instructors can create courses", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, auth, dto))]
pub async fn create_course(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateCourseDto>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    let course = CourseService::create(&state.db, auth.user_id(), dto).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// List courses created by the calling instructor
#[utoipa::path(
    get,
    path = "/api/courses/instructor",
    responses(
        (status = 200, description = "Instructor's courses", body = Vec<Course>),
        (status = 404, description = "No courses found for this instructor", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, auth))]
pub async fn list_instructor_courses(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Course>>, AppError> {
    let courses = CourseService::list_by_instructor(&state.db, auth.user_id()).await?;
    Ok(Json(courses))
}

/// Open a course for playback (enrolled students only)
#[utoipa::path(
    post,
    path = "/api/courses/play/{course_id}",
    params(("course_id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course content", body = PlayCourseResponse),
        (status = 403, description = "Not enrolled in this course", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, auth))]
pub async fn play_course(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(course_id): Path<Uuid>,
) -> Result<Json<PlayCourseResponse>, AppError> {
    let course = CourseService::play(&state.db, auth.user_id(), course_id).await?;
    Ok(Json(PlayCourseResponse {
        success: true,
        message: "Course loaded successfully".to_string(),
        course,
    }))
}

/// Update playback progress for a course
#[utoipa::path(
    put,
    path = "/api/courses/progress",
    request_body = UpdateProgressDto,
    responses(
        (status = 200, description = "Progress saved", body = CourseProgress),
        (status = 403, description = "Not enrolled in this course", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, auth, dto))]
pub async fn update_progress(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(dto): ValidatedJson<UpdateProgressDto>,
) -> Result<Json<CourseProgress>, AppError> {
    let progress = CourseService::update_progress(&state.db, auth.user_id(), dto).await?;
    Ok(Json(progress))
}
