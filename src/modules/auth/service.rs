use sqlx::PgPool;
use tracing::instrument;

use crate::config::jwt::JwtConfig;
use crate::modules::portfolios::service::PortfolioService;
use crate::modules::users::model::UserRole;
use crate::modules::users::service::UserService;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_token;
use crate::utils::password::verify_password;

use super::model::{AuthResponse, LoginRequest, RegisterRequest};

pub struct AuthService;

impl AuthService {
    /// Registers an account and issues a token for it. When the request
    /// carries any portfolio fields an unpublished portfolio is seeded in
    /// the same flow.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn register(
        db: &PgPool,
        dto: RegisterRequest,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        let role = UserRole::parse(&dto.role)
            .ok_or_else(|| AppError::bad_request("Invalid role specified"))?;

        if UserService::find_by_email(db, &dto.email).await?.is_some() {
            return Err(AppError::bad_request("User already exists"));
        }

        if let Some(username) = dto.username.as_deref() {
            if UserService::find_by_username(db, username).await?.is_some() {
                return Err(AppError::bad_request("Username already taken"));
            }
        }

        let user = UserService::create_user(
            db,
            &dto.email,
            &dto.password,
            dto.username.as_deref(),
            &dto.first_name,
            &dto.last_name,
            role,
        )
        .await?;

        if dto.portfolio_url.is_some() || dto.bio.is_some() || dto.skills.is_some() {
            PortfolioService::seed_for_registration(
                db,
                user.id,
                dto.portfolio_url.as_deref(),
                dto.bio.as_deref(),
                dto.skills.unwrap_or_default(),
            )
            .await?;
        }

        let token = create_token(user.id, user.role, jwt_config)?;

        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }

    /// Verifies credentials and issues a token. The caller learns only that
    /// the pair was invalid, never which half.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        let stored: Option<(uuid::Uuid, String)> =
            sqlx::query_as("SELECT id, password FROM users WHERE email = $1")
                .bind(&dto.email)
                .fetch_optional(db)
                .await?;

        let (user_id, hashed_password) = stored.ok_or(AppError::InvalidCredentials)?;

        if !verify_password(&dto.password, &hashed_password) {
            return Err(AppError::InvalidCredentials);
        }

        let user = UserService::get_user(db, user_id).await?;
        let token = create_token(user.id, user.role, jwt_config)?;

        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }
}
