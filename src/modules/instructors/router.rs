use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

use super::controller::{change_password, dashboard, get_profile, statistics};

/// `/api/instructor`. Authenticate and the instructor role gate are layered
/// at the nesting site.
pub fn init_instructors_router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile))
        .route("/dashboard", get(dashboard))
        .route("/statistics", get(statistics))
        .route("/change-password", put(change_password))
}
