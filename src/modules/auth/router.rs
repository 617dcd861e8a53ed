use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::middleware::auth::authenticate;
use crate::middleware::role::{require_admin, require_instructor, require_student};
use crate::state::AppState;

use super::controller::{login, protected_admin, protected_instructor, protected_student, register};

/// `/api/auth`. Register and login are public; the probe routes carry their
/// own authenticate + role layers because the rest of the router must stay
/// open. The role gate is layered first so that authenticate, added after
/// it, wraps it and runs first.
pub fn init_auth_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route(
            "/protected-admin",
            get(protected_admin)
                .route_layer(middleware::from_fn(require_admin))
                .route_layer(middleware::from_fn_with_state(state.clone(), authenticate)),
        )
        .route(
            "/protected-student",
            get(protected_student)
                .route_layer(middleware::from_fn(require_student))
                .route_layer(middleware::from_fn_with_state(state.clone(), authenticate)),
        )
        .route(
            "/protected-instructor",
            get(protected_instructor)
                .route_layer(middleware::from_fn(require_instructor))
                .route_layer(middleware::from_fn_with_state(state, authenticate)),
        )
}
