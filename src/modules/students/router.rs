use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

use super::controller::{change_password, dashboard, get_profile, statistics, update_profile};

/// `/api/student`. Authenticate and the student role gate are layered at the
/// nesting site.
pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile).put(update_profile))
        .route("/change-password", put(change_password))
        .route("/dashboard", get(dashboard))
        .route("/statistics", get(statistics))
}
