use sqlx::PgPool;
use sqlx::types::Json;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::service::UserService;
use crate::utils::errors::AppError;

use super::model::{CreatePortfolioDto, Portfolio, UpdatePortfolioDto};

const PORTFOLIO_COLUMNS: &str =
    "id, user_id, display_name, bio, about, portfolio_url, skills, experience, projects, \
     education, patents_or_papers, profile_links, published, created_at, updated_at";

pub struct PortfolioService;

impl PortfolioService {
    /// Applies a username claim to the owning account. Claiming a name the
    /// owner already holds is a no-op, not a clash.
    async fn claim_username(db: &PgPool, user_id: Uuid, username: &str) -> Result<(), AppError> {
        if let Some(existing) = UserService::find_by_username(db, username).await? {
            if existing.id != user_id {
                return Err(AppError::bad_request("Username already taken"));
            }
            return Ok(());
        }

        sqlx::query("UPDATE users SET username = $2, updated_at = NOW() WHERE id = $1")
            .bind(user_id)
            .bind(username)
            .execute(db)
            .await?;
        Ok(())
    }

    async fn find_by_user(db: &PgPool, user_id: Uuid) -> Result<Option<Portfolio>, AppError> {
        let query = format!("SELECT {PORTFOLIO_COLUMNS} FROM portfolios WHERE user_id = $1");
        let portfolio = sqlx::query_as::<_, Portfolio>(&query)
            .bind(user_id)
            .fetch_optional(db)
            .await?;
        Ok(portfolio)
    }

    #[instrument(skip(db))]
    pub async fn list_published(db: &PgPool) -> Result<Vec<Portfolio>, AppError> {
        let query = format!(
            "SELECT {PORTFOLIO_COLUMNS} FROM portfolios
             WHERE published ORDER BY created_at DESC"
        );
        let portfolios = sqlx::query_as::<_, Portfolio>(&query).fetch_all(db).await?;
        Ok(portfolios)
    }

    /// Public lookup. Distinguishes an unknown username from an unpublished
    /// or missing portfolio, as the two are different 404s to the caller.
    #[instrument(skip(db))]
    pub async fn get_by_username(db: &PgPool, username: &str) -> Result<Portfolio, AppError> {
        let user = UserService::find_by_username(db, username)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let query = format!(
            "SELECT {PORTFOLIO_COLUMNS} FROM portfolios WHERE user_id = $1 AND published"
        );
        sqlx::query_as::<_, Portfolio>(&query)
            .bind(user.id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found("Portfolio not found or not published"))
    }

    #[instrument(skip(db, dto))]
    pub async fn create(db: &PgPool, dto: CreatePortfolioDto) -> Result<Portfolio, AppError> {
        UserService::get_user(db, dto.user_id).await?;

        if Self::find_by_user(db, dto.user_id).await?.is_some() {
            return Err(AppError::bad_request("Portfolio already exists for this user"));
        }

        if let Some(username) = dto.username.as_deref() {
            Self::claim_username(db, dto.user_id, username).await?;
        }

        let query = format!(
            "INSERT INTO portfolios
                 (user_id, display_name, bio, about, portfolio_url, skills,
                  experience, projects, education, patents_or_papers, profile_links)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {PORTFOLIO_COLUMNS}"
        );
        let portfolio = sqlx::query_as::<_, Portfolio>(&query)
            .bind(dto.user_id)
            .bind(dto.display_name)
            .bind(dto.bio)
            .bind(dto.about)
            .bind(dto.portfolio_url)
            .bind(dto.skills.unwrap_or_default())
            .bind(Json(dto.experience.unwrap_or_default()))
            .bind(Json(dto.projects.unwrap_or_default()))
            .bind(Json(dto.education.unwrap_or_default()))
            .bind(dto.patents_or_papers.unwrap_or_default())
            .bind(dto.profile_links.unwrap_or_default())
            .fetch_one(db)
            .await?;

        Ok(portfolio)
    }

    /// Seeds an unpublished portfolio during registration. Only the fields
    /// the registration form carries are populated.
    #[instrument(skip(db, bio))]
    pub async fn seed_for_registration(
        db: &PgPool,
        user_id: Uuid,
        portfolio_url: Option<&str>,
        bio: Option<&str>,
        skills: Vec<String>,
    ) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO portfolios (user_id, portfolio_url, bio, skills)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (user_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(portfolio_url)
        .bind(bio)
        .bind(skills)
        .execute(db)
        .await?;
        Ok(())
    }

    #[instrument(skip(db, dto))]
    pub async fn update(
        db: &PgPool,
        user_id: Uuid,
        dto: UpdatePortfolioDto,
    ) -> Result<Portfolio, AppError> {
        if Self::find_by_user(db, user_id).await?.is_none() {
            return Err(AppError::not_found("Portfolio not found"));
        }

        if let Some(username) = dto.username.as_deref() {
            Self::claim_username(db, user_id, username).await?;
        }

        let query = format!(
            "UPDATE portfolios SET
                 display_name = COALESCE($2, display_name),
                 bio = COALESCE($3, bio),
                 about = COALESCE($4, about),
                 portfolio_url = COALESCE($5, portfolio_url),
                 skills = COALESCE($6, skills),
                 experience = COALESCE($7, experience),
                 projects = COALESCE($8, projects),
                 education = COALESCE($9, education),
                 patents_or_papers = COALESCE($10, patents_or_papers),
                 profile_links = COALESCE($11, profile_links),
                 published = COALESCE($12, published),
                 updated_at = NOW()
             WHERE user_id = $1
             RETURNING {PORTFOLIO_COLUMNS}"
        );
        let portfolio = sqlx::query_as::<_, Portfolio>(&query)
            .bind(user_id)
            .bind(dto.display_name)
            .bind(dto.bio)
            .bind(dto.about)
            .bind(dto.portfolio_url)
            .bind(dto.skills)
            .bind(dto.experience.map(Json))
            .bind(dto.projects.map(Json))
            .bind(dto.education.map(Json))
            .bind(dto.patents_or_papers)
            .bind(dto.profile_links)
            .bind(dto.published)
            .fetch_one(db)
            .await?;

        Ok(portfolio)
    }

    #[instrument(skip(db))]
    pub async fn toggle_publish(db: &PgPool, user_id: Uuid) -> Result<Portfolio, AppError> {
        let query = format!(
            "UPDATE portfolios SET published = NOT published, updated_at = NOW()
             WHERE user_id = $1
             RETURNING {PORTFOLIO_COLUMNS}"
        );
        sqlx::query_as::<_, Portfolio>(&query)
            .bind(user_id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found("Portfolio not found"))
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, user_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM portfolios WHERE user_id = $1")
            .bind(user_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Portfolio not found"));
        }
        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn get_profile(db: &PgPool, user_id: Uuid) -> Result<Portfolio, AppError> {
        Self::find_by_user(db, user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Profile not found"))
    }
}
