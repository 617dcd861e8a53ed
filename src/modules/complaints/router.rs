use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};

use crate::middleware::auth::authenticate;
use crate::middleware::role::{require_admin_access, require_instructor};
use crate::state::AppState;

use super::controller::{
    create_complaint, delete_complaint, delete_student_complaint, list_complaints,
    list_student_complaints, update_complaint,
};

/// `/api/complaints`. Authenticate wraps the whole router; the instructor
/// listing and the admin delete carry their own role gates on top.
pub fn init_complaints_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/create", post(create_complaint))
        .route(
            "/",
            get(list_complaints).route_layer(middleware::from_fn(require_instructor)),
        )
        .route("/student", get(list_student_complaints))
        .route("/{id}", patch(update_complaint))
        .route(
            "/{id}",
            delete(delete_complaint).route_layer(middleware::from_fn(require_admin_access)),
        )
        .route("/student/{id}", delete(delete_student_complaint))
        .route_layer(middleware::from_fn_with_state(state, authenticate))
}
