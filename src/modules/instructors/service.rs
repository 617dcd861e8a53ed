use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::model::{ChangePasswordDto, User};
use crate::modules::users::service::UserService;
use crate::utils::errors::AppError;

use super::model::{ComplaintStatistics, InstructorCourseSummary, InstructorDashboard};

fn as_instructor_not_found(err: AppError) -> AppError {
    match err {
        AppError::NotFound(_) => AppError::not_found("Instructor not found"),
        other => other,
    }
}

pub struct InstructorService;

impl InstructorService {
    #[instrument(skip(db))]
    pub async fn get_profile(db: &PgPool, instructor_id: Uuid) -> Result<User, AppError> {
        UserService::get_user(db, instructor_id)
            .await
            .map_err(as_instructor_not_found)
    }

    #[instrument(skip(db, dto))]
    pub async fn change_password(
        db: &PgPool,
        instructor_id: Uuid,
        dto: ChangePasswordDto,
    ) -> Result<(), AppError> {
        UserService::change_password(db, instructor_id, dto)
            .await
            .map_err(as_instructor_not_found)
    }

    #[instrument(skip(db))]
    pub async fn dashboard(
        db: &PgPool,
        instructor_id: Uuid,
    ) -> Result<InstructorDashboard, AppError> {
        let course_data = sqlx::query_as::<_, InstructorCourseSummary>(
            "SELECT c.id AS course_id, c.title AS course_title,
                    COUNT(e.student_id) AS enrolled_students
             FROM courses c
             LEFT JOIN enrollments e ON e.course_id = c.id
             WHERE c.instructor_id = $1
             GROUP BY c.id, c.title, c.created_at
             ORDER BY c.created_at DESC",
        )
        .bind(instructor_id)
        .fetch_all(db)
        .await?;

        Ok(InstructorDashboard {
            total_courses: course_data.len() as i64,
            course_data,
        })
    }

    #[instrument(skip(db))]
    pub async fn complaint_statistics(db: &PgPool) -> Result<ComplaintStatistics, AppError> {
        let (total_complaints, resolved_complaints, pending_complaints): (i64, i64, i64) =
            sqlx::query_as(
                "SELECT COUNT(*),
                        COUNT(*) FILTER (WHERE status = 'resolved'),
                        COUNT(*) FILTER (WHERE status = 'pending')
                 FROM complaints",
            )
            .fetch_one(db)
            .await?;

        Ok(ComplaintStatistics {
            total_complaints,
            resolved_complaints,
            pending_complaints,
        })
    }
}
