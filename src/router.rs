use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::auth::authenticate;
use crate::middleware::role::{require_admin, require_instructor, require_student};
use crate::modules::admin::router::init_admin_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::complaints::router::init_complaints_router;
use crate::modules::courses::router::init_courses_router;
use crate::modules::instructors::router::init_instructors_router;
use crate::modules::portfolios::router::init_portfolios_router;
use crate::modules::students::router::init_students_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

/// Assembles the full application. Role gates are layered before
/// authenticate so that authenticate, added after, wraps them and runs
/// first on every request.
pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .nest("/auth", init_auth_router(state.clone()))
                .nest(
                    "/courses",
                    init_courses_router().route_layer(middleware::from_fn_with_state(
                        state.clone(),
                        authenticate,
                    )),
                )
                .nest("/complaints", init_complaints_router(state.clone()))
                .nest(
                    "/student",
                    init_students_router()
                        .route_layer(middleware::from_fn(require_student))
                        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate)),
                )
                .nest(
                    "/instructor",
                    init_instructors_router()
                        .route_layer(middleware::from_fn(require_instructor))
                        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate)),
                )
                .nest(
                    "/admin",
                    init_admin_router()
                        .route_layer(middleware::from_fn(require_admin))
                        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate)),
                )
                .nest("/portfolios", init_portfolios_router(state.clone())),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
