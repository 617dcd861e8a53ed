use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::courses::model::CourseWithInstructor;
use crate::modules::courses::service::CourseService;
use crate::modules::portfolios::model::Portfolio;
use crate::modules::portfolios::service::PortfolioService;
use crate::modules::users::model::{User, UserRole};
use crate::modules::users::service::UserService;
use crate::utils::errors::AppError;

use super::model::{CreateAccountDto, ManageEnrollmentDto};

pub struct AdminService;

impl AdminService {
    /// Creates an account with a role decided by the admin route. The
    /// duplicate check is explicit so the message names the clash.
    #[instrument(skip(db, dto))]
    pub async fn create_account(
        db: &PgPool,
        dto: CreateAccountDto,
        role: UserRole,
    ) -> Result<User, AppError> {
        if UserService::find_by_email(db, &dto.email).await?.is_some() {
            return Err(AppError::bad_request("User already exists"));
        }

        UserService::create_user(
            db,
            &dto.email,
            &dto.password,
            None,
            &dto.first_name,
            &dto.last_name,
            role,
        )
        .await
    }

    #[instrument(skip(db))]
    pub async fn list_students(db: &PgPool) -> Result<Vec<User>, AppError> {
        UserService::list_by_role(db, UserRole::Student).await
    }

    #[instrument(skip(db))]
    pub async fn get_student_profile(db: &PgPool, student_id: Uuid) -> Result<User, AppError> {
        let user = UserService::get_user(db, student_id)
            .await
            .map_err(|err| match err {
                AppError::NotFound(_) => AppError::not_found("Student not found"),
                other => other,
            })?;

        if user.role != UserRole::Student {
            return Err(AppError::not_found("Student not found"));
        }
        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn delete_student(db: &PgPool, student_id: Uuid) -> Result<(), AppError> {
        if !UserService::delete_user_with_role(db, student_id, UserRole::Student).await? {
            return Err(AppError::not_found("Student not found"));
        }
        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn list_instructors(db: &PgPool) -> Result<Vec<User>, AppError> {
        let instructors = UserService::list_by_role(db, UserRole::Instructor).await?;
        if instructors.is_empty() {
            return Err(AppError::not_found("No instructors found"));
        }
        Ok(instructors)
    }

    #[instrument(skip(db))]
    pub async fn delete_instructor(db: &PgPool, instructor_id: Uuid) -> Result<(), AppError> {
        if !UserService::delete_user_with_role(db, instructor_id, UserRole::Instructor).await? {
            return Err(AppError::not_found("Instructor not found"));
        }
        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn list_courses(db: &PgPool) -> Result<Vec<CourseWithInstructor>, AppError> {
        CourseService::list_with_instructors(db).await
    }

    async fn ensure_student(db: &PgPool, student_id: Uuid) -> Result<(), AppError> {
        let role: Option<UserRole> = sqlx::query_scalar("SELECT role FROM users WHERE id = $1")
            .bind(student_id)
            .fetch_optional(db)
            .await?;

        if role != Some(UserRole::Student) {
            return Err(AppError::not_found("Student not found"));
        }
        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn assign_course(db: &PgPool, dto: ManageEnrollmentDto) -> Result<(), AppError> {
        Self::ensure_student(db, dto.student_id).await?;
        CourseService::assign(db, dto.student_id, dto.course_id).await
    }

    #[instrument(skip(db))]
    pub async fn remove_course(db: &PgPool, dto: ManageEnrollmentDto) -> Result<(), AppError> {
        Self::ensure_student(db, dto.student_id).await?;
        CourseService::remove(db, dto.student_id, dto.course_id).await
    }

    #[instrument(skip(db))]
    pub async fn list_portfolios(db: &PgPool) -> Result<Vec<Portfolio>, AppError> {
        PortfolioService::list_published(db).await
    }
}
