use sqlx::PgPool;
use sqlx::types::Json;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::model::UserRole;
use crate::utils::errors::AppError;

use super::model::{
    Course, CourseContent, CourseProgress, CourseWithEnrollment, CourseWithInstructor,
    CreateCourseDto, UpdateProgressDto,
};

const COURSE_COLUMNS: &str = "id, title, description, course_code, capacity, instructor_id, \
                              status, modules, created_at, updated_at";

// Qualified variant for joined queries where bare column names would be
// ambiguous.
const COURSE_COLUMNS_QUALIFIED: &str =
    "courses.id, courses.title, courses.description, courses.course_code, courses.capacity, \
     courses.instructor_id, courses.status, courses.modules, courses.created_at, \
     courses.updated_at";

pub struct CourseService;

impl CourseService {
    async fn course_exists(db: &PgPool, course_id: Uuid) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM courses WHERE id = $1)")
            .bind(course_id)
            .fetch_one(db)
            .await?;
        Ok(exists)
    }

    async fn is_enrolled(db: &PgPool, student_id: Uuid, course_id: Uuid) -> Result<bool, AppError> {
        let enrolled: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM enrollments WHERE student_id = $1 AND course_id = $2)",
        )
        .bind(student_id)
        .bind(course_id)
        .fetch_one(db)
        .await?;
        Ok(enrolled)
    }

    /// Catalog view: every course, each flagged with the caller's own
    /// enrollment state.
    #[instrument(skip(db))]
    pub async fn list_with_enrollment(
        db: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<CourseWithEnrollment>, AppError> {
        let query = format!(
            "SELECT {COURSE_COLUMNS},
                    EXISTS(SELECT 1 FROM enrollments e
                           WHERE e.course_id = courses.id AND e.student_id = $1) AS is_enrolled
             FROM courses ORDER BY created_at DESC"
        );
        let courses = sqlx::query_as::<_, CourseWithEnrollment>(&query)
            .bind(user_id)
            .fetch_all(db)
            .await?;
        Ok(courses)
    }

    #[instrument(skip(db))]
    pub async fn list_enrolled(db: &PgPool, student_id: Uuid) -> Result<Vec<Course>, AppError> {
        let query = format!(
            "SELECT {COURSE_COLUMNS_QUALIFIED} FROM courses
             JOIN enrollments e ON e.course_id = courses.id
             WHERE e.student_id = $1
             ORDER BY courses.created_at DESC"
        );
        let courses = sqlx::query_as::<_, Course>(&query)
            .bind(student_id)
            .fetch_all(db)
            .await?;

        if courses.is_empty() {
            return Err(AppError::not_found("No courses found for this student"));
        }
        Ok(courses)
    }

    #[instrument(skip(db))]
    pub async fn enroll(db: &PgPool, student_id: Uuid, course_id: Uuid) -> Result<(), AppError> {
        if !Self::course_exists(db, course_id).await? {
            return Err(AppError::not_found("Course not found"));
        }
        if Self::is_enrolled(db, student_id, course_id).await? {
            return Err(AppError::bad_request("You are already enrolled in this course"));
        }

        sqlx::query("INSERT INTO enrollments (student_id, course_id) VALUES ($1, $2)")
            .bind(student_id)
            .bind(course_id)
            .execute(db)
            .await?;
        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn withdraw(db: &PgPool, student_id: Uuid, course_id: Uuid) -> Result<(), AppError> {
        if !Self::course_exists(db, course_id).await? {
            return Err(AppError::not_found("Course not found"));
        }

        let result = sqlx::query("DELETE FROM enrollments WHERE student_id = $1 AND course_id = $2")
            .bind(student_id)
            .bind(course_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::bad_request("You are not enrolled in this course"));
        }
        Ok(())
    }

    /// Course creation. The role is re-checked against the stored user, not
    /// just the token, so a stale instructor token cannot create courses
    /// after a role change.
    #[instrument(skip(db, dto))]
    pub async fn create(
        db: &PgPool,
        instructor_id: Uuid,
        dto: CreateCourseDto,
    ) -> Result<Course, AppError> {
        let role: Option<UserRole> = sqlx::query_scalar("SELECT role FROM users WHERE id = $1")
            .bind(instructor_id)
            .fetch_optional(db)
            .await?;

        if role != Some(UserRole::Instructor) {
            return Err(AppError::forbidden("Only instructors can create courses"));
        }

        let query = format!(
            "INSERT INTO courses (title, description, course_code, capacity, instructor_id, modules)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COURSE_COLUMNS}"
        );
        let course = sqlx::query_as::<_, Course>(&query)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(&dto.course_code)
            .bind(dto.capacity)
            .bind(instructor_id)
            .bind(Json(&dto.modules))
            .fetch_one(db)
            .await?;

        Ok(course)
    }

    #[instrument(skip(db))]
    pub async fn list_by_instructor(
        db: &PgPool,
        instructor_id: Uuid,
    ) -> Result<Vec<Course>, AppError> {
        let query = format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE instructor_id = $1 ORDER BY created_at DESC"
        );
        let courses = sqlx::query_as::<_, Course>(&query)
            .bind(instructor_id)
            .fetch_all(db)
            .await?;

        if courses.is_empty() {
            return Err(AppError::not_found("No courses found for this instructor"));
        }
        Ok(courses)
    }

    /// Opens a course for playback. Enrollment is mandatory; a progress row
    /// is created at zero on first play so the dashboard always has one.
    #[instrument(skip(db))]
    pub async fn play(
        db: &PgPool,
        student_id: Uuid,
        course_id: Uuid,
    ) -> Result<CourseContent, AppError> {
        let content = sqlx::query_as::<_, CourseContent>(
            "SELECT title, description, course_code, modules FROM courses WHERE id = $1",
        )
        .bind(course_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("Course not found"))?;

        if !Self::is_enrolled(db, student_id, course_id).await? {
            return Err(AppError::forbidden("You are not enrolled in this course"));
        }

        sqlx::query(
            "INSERT INTO course_progress (course_id, student_id, progress)
             VALUES ($1, $2, 0)
             ON CONFLICT (course_id, student_id) DO NOTHING",
        )
        .bind(course_id)
        .bind(student_id)
        .execute(db)
        .await?;

        Ok(content)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_progress(
        db: &PgPool,
        student_id: Uuid,
        dto: UpdateProgressDto,
    ) -> Result<CourseProgress, AppError> {
        if !Self::course_exists(db, dto.course_id).await? {
            return Err(AppError::not_found("Course not found"));
        }
        if !Self::is_enrolled(db, student_id, dto.course_id).await? {
            return Err(AppError::forbidden("You are not enrolled in this course"));
        }

        let progress = sqlx::query_as::<_, CourseProgress>(
            "INSERT INTO course_progress (course_id, student_id, progress, last_played_module)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (course_id, student_id) DO UPDATE
             SET progress = EXCLUDED.progress,
                 last_played_module = COALESCE(EXCLUDED.last_played_module,
                                               course_progress.last_played_module),
                 updated_at = NOW()
             RETURNING course_id, student_id, progress, last_played_module, updated_at",
        )
        .bind(dto.course_id)
        .bind(student_id)
        .bind(dto.progress)
        .bind(dto.last_played_module)
        .fetch_one(db)
        .await?;

        Ok(progress)
    }

    /// Admin-driven enrollment. Idempotent so repeating an assignment is not
    /// an error.
    #[instrument(skip(db))]
    pub async fn assign(db: &PgPool, student_id: Uuid, course_id: Uuid) -> Result<(), AppError> {
        if !Self::course_exists(db, course_id).await? {
            return Err(AppError::not_found("Course not found"));
        }

        sqlx::query(
            "INSERT INTO enrollments (student_id, course_id) VALUES ($1, $2)
             ON CONFLICT (student_id, course_id) DO NOTHING",
        )
        .bind(student_id)
        .bind(course_id)
        .execute(db)
        .await?;
        Ok(())
    }

    /// Admin-driven withdrawal. Removing an enrollment that does not exist
    /// leaves the same end state, so it is not an error.
    #[instrument(skip(db))]
    pub async fn remove(db: &PgPool, student_id: Uuid, course_id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM enrollments WHERE student_id = $1 AND course_id = $2")
            .bind(student_id)
            .bind(course_id)
            .execute(db)
            .await?;
        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn list_with_instructors(db: &PgPool) -> Result<Vec<CourseWithInstructor>, AppError> {
        let query = format!(
            "SELECT {COURSE_COLUMNS_QUALIFIED},
                    u.first_name AS instructor_first_name,
                    u.last_name AS instructor_last_name,
                    u.email AS instructor_email
             FROM courses
             JOIN users u ON u.id = courses.instructor_id
             ORDER BY courses.created_at DESC"
        );
        let courses = sqlx::query_as::<_, CourseWithInstructor>(&query)
            .fetch_all(db)
            .await?;

        if courses.is_empty() {
            return Err(AppError::not_found("No courses found"));
        }
        Ok(courses)
    }
}
