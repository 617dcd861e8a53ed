mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_course, create_test_user, generate_unique_email, setup_test_app};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

async fn get_auth_token(app: axum::Router, email: &str, password: &str) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": email,
                "password": password
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let body = body_json(response).await;
    body["token"].as_str().unwrap().to_string()
}

async fn manage_enrollment(
    pool: PgPool,
    token: &str,
    action: &str,
    student_id: Uuid,
    course_id: Uuid,
) -> axum::response::Response {
    let request = Request::builder()
        .method("POST")
        .uri(format!("/api/admin/{action}"))
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(
            serde_json::to_string(&json!({
                "studentId": student_id,
                "courseId": course_id
            }))
            .unwrap(),
        ))
        .unwrap();

    setup_test_app(pool).oneshot(request).await.unwrap()
}

async fn is_enrolled(pool: &PgPool, student_id: Uuid, course_id: Uuid) -> bool {
    sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM enrollments WHERE student_id = $1 AND course_id = $2)",
    )
    .bind(student_id)
    .bind(course_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_remove_course_is_idempotent(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let admin = create_test_user(&mut tx, &generate_unique_email(), "adminpass123", "admin").await;
    let student =
        create_test_user(&mut tx, &generate_unique_email(), "studentpass1", "student").await;
    let instructor = create_test_user(
        &mut tx,
        &generate_unique_email(),
        "instructorpass1",
        "instructor",
    )
    .await;
    let course_id = create_test_course(&mut tx, instructor.id).await;
    sqlx::query("INSERT INTO enrollments (student_id, course_id) VALUES ($1, $2)")
        .bind(student.id)
        .bind(course_id)
        .execute(&mut *tx)
        .await
        .unwrap();
    tx.commit().await.unwrap();

    let token = get_auth_token(setup_test_app(pool.clone()), &admin.email, "adminpass123").await;

    // First removal deletes the enrollment, the second finds nothing to
    // delete; both report the same success.
    for _ in 0..2 {
        let response =
            manage_enrollment(pool.clone(), &token, "remove-course", student.id, course_id).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Course removed successfully" })
        );
    }

    assert!(!is_enrolled(&pool, student.id, course_id).await);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_assign_course_is_idempotent(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let admin = create_test_user(&mut tx, &generate_unique_email(), "adminpass123", "admin").await;
    let student =
        create_test_user(&mut tx, &generate_unique_email(), "studentpass1", "student").await;
    let instructor = create_test_user(
        &mut tx,
        &generate_unique_email(),
        "instructorpass1",
        "instructor",
    )
    .await;
    let course_id = create_test_course(&mut tx, instructor.id).await;
    tx.commit().await.unwrap();

    let token = get_auth_token(setup_test_app(pool.clone()), &admin.email, "adminpass123").await;

    for _ in 0..2 {
        let response =
            manage_enrollment(pool.clone(), &token, "assign-course", student.id, course_id).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Course assigned successfully" })
        );
    }

    assert!(is_enrolled(&pool, student.id, course_id).await);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_routes_reject_non_admin_callers(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let student =
        create_test_user(&mut tx, &generate_unique_email(), "studentpass1", "student").await;
    tx.commit().await.unwrap();

    let token = get_auth_token(setup_test_app(pool.clone()), &student.email, "studentpass1").await;

    let request = Request::builder()
        .uri("/api/admin/students")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = setup_test_app(pool).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await, json!({ "message": "Forbidden" }));
}
