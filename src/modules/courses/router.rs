use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

use super::controller::{
    create_course, enroll_in_course, list_courses, list_enrolled_courses, list_instructor_courses,
    play_course, update_progress, withdraw_from_course,
};

/// `/api/courses`. The whole router is layered with authenticate at the
/// nesting site; instructor-only behavior is enforced in the service so the
/// stored role, not the token, decides.
pub fn init_courses_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses))
        .route("/enrolled", get(list_enrolled_courses))
        .route("/enroll", post(enroll_in_course))
        .route("/withdraw", delete(withdraw_from_course))
        .route("/create", post(create_course))
        .route("/instructor", get(list_instructor_courses))
        .route("/play/{course_id}", post(play_course))
        .route("/progress", put(update_progress))
}
