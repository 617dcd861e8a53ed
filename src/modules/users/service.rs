use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;
use crate::utils::password::{hash_password, verify_password};

use super::model::{ChangePasswordDto, UpdateProfileDto, User, UserRole};

const USER_COLUMNS: &str =
    "id, email, username, first_name, last_name, role, phone_number, created_at, updated_at";

/// Account persistence shared by every module that touches users. Handlers
/// never query the users table directly.
pub struct UserService;

impl UserService {
    #[instrument(skip(db))]
    pub async fn get_user(db: &PgPool, user_id: Uuid) -> Result<User, AppError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    #[instrument(skip(db))]
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, AppError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(db)
            .await?;
        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn find_by_username(db: &PgPool, username: &str) -> Result<Option<User>, AppError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(db)
            .await?;
        Ok(user)
    }

    /// Inserts a new account. The plaintext password is hashed exactly once
    /// here; no other write path touches the password column.
    #[instrument(skip(db, password))]
    pub async fn create_user(
        db: &PgPool,
        email: &str,
        password: &str,
        username: Option<&str>,
        first_name: &str,
        last_name: &str,
        role: UserRole,
    ) -> Result<User, AppError> {
        let hashed_password = hash_password(password)?;

        let query = format!(
            "INSERT INTO users (email, password, username, first_name, last_name, role)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {USER_COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(email)
            .bind(&hashed_password)
            .bind(username)
            .bind(first_name)
            .bind(last_name)
            .bind(role)
            .fetch_one(db)
            .await
            .map_err(|err| match &err {
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                    AppError::bad_request("User already exists")
                }
                _ => AppError::from(err),
            })?;

        Ok(user)
    }

    /// Partial profile update. Absent fields keep their stored values; the
    /// password column is never part of this statement.
    #[instrument(skip(db, dto))]
    pub async fn update_profile(
        db: &PgPool,
        user_id: Uuid,
        dto: UpdateProfileDto,
    ) -> Result<User, AppError> {
        let query = format!(
            "UPDATE users SET
                 first_name = COALESCE($2, first_name),
                 last_name = COALESCE($3, last_name),
                 email = COALESCE($4, email),
                 phone_number = COALESCE($5, phone_number),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .bind(dto.first_name)
            .bind(dto.last_name)
            .bind(dto.email)
            .bind(dto.phone_number)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    #[instrument(skip(db, dto))]
    pub async fn change_password(
        db: &PgPool,
        user_id: Uuid,
        dto: ChangePasswordDto,
    ) -> Result<(), AppError> {
        let stored: Option<String> = sqlx::query_scalar("SELECT password FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(db)
            .await?;
        let stored = stored.ok_or_else(|| AppError::not_found("User not found"))?;

        if !verify_password(&dto.current_password, &stored) {
            return Err(AppError::bad_request("Current password is incorrect"));
        }

        let hashed_password = hash_password(&dto.new_password)?;
        sqlx::query("UPDATE users SET password = $2, updated_at = NOW() WHERE id = $1")
            .bind(user_id)
            .bind(&hashed_password)
            .execute(db)
            .await?;

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn list_by_role(db: &PgPool, role: UserRole) -> Result<Vec<User>, AppError> {
        let query = format!(
            "SELECT {USER_COLUMNS} FROM users WHERE role = $1 ORDER BY created_at DESC"
        );
        let users = sqlx::query_as::<_, User>(&query)
            .bind(role)
            .fetch_all(db)
            .await?;
        Ok(users)
    }

    /// Deletes the user only when it exists with the given role; `false`
    /// means nothing matched.
    #[instrument(skip(db))]
    pub async fn delete_user_with_role(
        db: &PgPool,
        user_id: Uuid,
        role: UserRole,
    ) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1 AND role = $2")
            .bind(user_id)
            .bind(role)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
