use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::model::{ChangePasswordDto, UpdateProfileDto, User};
use crate::modules::users::service::UserService;
use crate::utils::errors::AppError;

use super::model::{DashboardComplaint, DashboardCourse, StudentDashboard, StudentStatistics};

fn as_student_not_found(err: AppError) -> AppError {
    match err {
        AppError::NotFound(_) => AppError::not_found("Student not found"),
        other => other,
    }
}

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db))]
    pub async fn get_profile(db: &PgPool, student_id: Uuid) -> Result<User, AppError> {
        UserService::get_user(db, student_id)
            .await
            .map_err(as_student_not_found)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_profile(
        db: &PgPool,
        student_id: Uuid,
        dto: UpdateProfileDto,
    ) -> Result<User, AppError> {
        UserService::update_profile(db, student_id, dto)
            .await
            .map_err(as_student_not_found)
    }

    #[instrument(skip(db, dto))]
    pub async fn change_password(
        db: &PgPool,
        student_id: Uuid,
        dto: ChangePasswordDto,
    ) -> Result<(), AppError> {
        UserService::change_password(db, student_id, dto)
            .await
            .map_err(as_student_not_found)
    }

    /// One round trip per collection; the totals are the collection lengths,
    /// as the dashboard shows every row it counts.
    #[instrument(skip(db))]
    pub async fn dashboard(db: &PgPool, student_id: Uuid) -> Result<StudentDashboard, AppError> {
        let courses = sqlx::query_as::<_, DashboardCourse>(
            "SELECT c.id AS course_id, c.title AS course_title,
                    c.course_code, c.status AS course_status
             FROM courses c
             JOIN enrollments e ON e.course_id = c.id
             WHERE e.student_id = $1
             ORDER BY c.created_at DESC",
        )
        .bind(student_id)
        .fetch_all(db)
        .await?;

        let complaints = sqlx::query_as::<_, DashboardComplaint>(
            "SELECT id AS complaint_id, description, status
             FROM complaints
             WHERE student_id = $1
             ORDER BY created_at DESC",
        )
        .bind(student_id)
        .fetch_all(db)
        .await?;

        Ok(StudentDashboard {
            total_courses: courses.len() as i64,
            total_complaints: complaints.len() as i64,
            courses,
            complaints,
        })
    }

    #[instrument(skip(db))]
    pub async fn statistics(db: &PgPool, student_id: Uuid) -> Result<StudentStatistics, AppError> {
        let (total_courses, completed_courses): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*),
                    COUNT(*) FILTER (WHERE c.status = 'completed')
             FROM courses c
             JOIN enrollments e ON e.course_id = c.id
             WHERE e.student_id = $1",
        )
        .bind(student_id)
        .fetch_one(db)
        .await?;

        Ok(StudentStatistics {
            total_courses,
            completed_courses,
        })
    }
}
