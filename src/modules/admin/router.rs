use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

use super::controller::{
    assign_course, create_admin, create_instructor, create_student, delete_instructor,
    delete_student, get_student_profile, list_courses, list_instructors, list_portfolios,
    list_students, remove_course,
};

/// `/api/admin`. Authenticate and the admin role gate are layered at the
/// nesting site; every route here assumes an admin caller.
pub fn init_admin_router() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_admin))
        .route("/students", get(list_students).post(create_student))
        .route(
            "/students/{id}",
            get(get_student_profile).delete(delete_student),
        )
        .route("/instructors", get(list_instructors).post(create_instructor))
        .route("/instructors/{id}", delete(delete_instructor))
        .route("/courses", get(list_courses))
        .route("/assign-course", post(assign_course))
        .route("/remove-course", post(remove_course))
        .route("/portfolios", get(list_portfolios))
}
