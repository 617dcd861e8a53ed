use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::check_ownership;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::MessageResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{
    CreatePortfolioDto, Portfolio, PortfolioResponse, ProfileResponse, UpdatePortfolioDto,
};
use super::service::PortfolioService;

/// List all published portfolios
#[utoipa::path(
    get,
    path = "/api/portfolios",
    responses((status = 200, description = "Published portfolios", body = Vec<Portfolio>)),
    tag = "Portfolios"
)]
#[instrument(skip(state))]
pub async fn list_portfolios(
    State(state): State<AppState>,
) -> Result<Json<Vec<Portfolio>>, AppError> {
    let portfolios = PortfolioService::list_published(&state.db).await?;
    Ok(Json(portfolios))
}

/// Get a published portfolio by username
#[utoipa::path(
    get,
    path = "/api/portfolios/username/{username}",
    params(("username" = String, Path, description = "Claimed username")),
    responses(
        (status = 200, description = "Portfolio", body = Portfolio),
        (status = 404, description = "User not found, or portfolio missing/unpublished", body = ErrorResponse)
    ),
    tag = "Portfolios"
)]
#[instrument(skip(state))]
pub async fn get_portfolio_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Portfolio>, AppError> {
    let portfolio = PortfolioService::get_by_username(&state.db, &username).await?;
    Ok(Json(portfolio))
}

/// Create a portfolio
///
/// The owner id is in the body, so the ownership check happens here rather
/// than in a path-based layer.
#[utoipa::path(
    post,
    path = "/api/portfolios",
    request_body = CreatePortfolioDto,
    responses(
        (status = 201, description = "Portfolio created", body = PortfolioResponse),
        (status = 400, description = "Portfolio already exists or username taken", body = ErrorResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Portfolios"
)]
#[instrument(skip(state, auth, dto))]
pub async fn create_portfolio(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreatePortfolioDto>,
) -> Result<(StatusCode, Json<PortfolioResponse>), AppError> {
    check_ownership(&auth.0, dto.user_id)?;

    let portfolio = PortfolioService::create(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(PortfolioResponse {
            message: "Portfolio created successfully".to_string(),
            portfolio,
        }),
    ))
}

/// Update a portfolio
#[utoipa::path(
    put,
    path = "/api/portfolios/{user_id}",
    params(("user_id" = Uuid, Path, description = "Owning user id")),
    request_body = UpdatePortfolioDto,
    responses(
        (status = 200, description = "Portfolio updated", body = PortfolioResponse),
        (status = 400, description = "Username already taken", body = ErrorResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Portfolio not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Portfolios"
)]
#[instrument(skip(state, dto))]
pub async fn update_portfolio(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdatePortfolioDto>,
) -> Result<Json<PortfolioResponse>, AppError> {
    let portfolio = PortfolioService::update(&state.db, user_id, dto).await?;
    Ok(Json(PortfolioResponse {
        message: "Portfolio updated successfully".to_string(),
        portfolio,
    }))
}

/// Toggle a portfolio's publish state
#[utoipa::path(
    put,
    path = "/api/portfolios/{user_id}/publish",
    params(("user_id" = Uuid, Path, description = "Owning user id")),
    responses(
        (status = 200, description = "Publish state toggled", body = PortfolioResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Portfolio not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Portfolios"
)]
#[instrument(skip(state))]
pub async fn toggle_publish(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<PortfolioResponse>, AppError> {
    let portfolio = PortfolioService::toggle_publish(&state.db, user_id).await?;
    let state_word = if portfolio.published {
        "published"
    } else {
        "unpublished"
    };
    Ok(Json(PortfolioResponse {
        message: format!("Portfolio {state_word} successfully"),
        portfolio,
    }))
}

/// Delete a portfolio
#[utoipa::path(
    delete,
    path = "/api/portfolios/{user_id}",
    params(("user_id" = Uuid, Path, description = "Owning user id")),
    responses(
        (status = 200, description = "Portfolio deleted", body = MessageResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Portfolio not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Portfolios"
)]
#[instrument(skip(state))]
pub async fn delete_portfolio(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    PortfolioService::delete(&state.db, user_id).await?;
    Ok(Json(MessageResponse {
        message: "Portfolio deleted successfully".to_string(),
    }))
}

/// Get the profile data behind a portfolio, published or not
#[utoipa::path(
    get,
    path = "/api/portfolios/profile/{user_id}",
    params(("user_id" = Uuid, Path, description = "Owning user id")),
    responses(
        (status = 200, description = "Profile data", body = ProfileResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Profile not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Portfolios"
)]
#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = PortfolioService::get_profile(&state.db, user_id).await?;
    Ok(Json(ProfileResponse { profile }))
}
