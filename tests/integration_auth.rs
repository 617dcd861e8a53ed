mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_user, generate_unique_email, setup_test_app, test_jwt_config};
use http_body_util::BodyExt;
use learnbyte::config::jwt::JwtConfig;
use learnbyte::modules::users::model::UserRole;
use learnbyte::utils::jwt::create_token;
use serde_json::json;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;
use uuid::Uuid;

/// Pool that never opens a connection. The authentication and role gates
/// reject before any handler touches the database, so the gate tests run
/// without one.
fn lazy_pool() -> PgPool {
    PgPoolOptions::new()
        .connect_lazy("postgres://localhost/learnbyte_gate_tests")
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_missing_token_is_401_no_token_provided() {
    let app = setup_test_app(lazy_pool());

    let request = Request::builder()
        .uri("/api/auth/protected-student")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "No token provided" })
    );
}

#[tokio::test]
async fn test_garbage_token_is_403_invalid_token() {
    let app = setup_test_app(lazy_pool());

    let request = Request::builder()
        .uri("/api/auth/protected-student")
        .header("authorization", "Bearer not.a.jwt")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Invalid token" })
    );
}

#[tokio::test]
async fn test_expired_token_is_403_invalid_token() {
    let app = setup_test_app(lazy_pool());

    let expired_config = JwtConfig {
        token_expiry: -100,
        ..test_jwt_config()
    };
    let token = create_token(Uuid::new_v4(), UserRole::Student, &expired_config).unwrap();

    let request = Request::builder()
        .uri("/api/auth/protected-student")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Invalid token" })
    );
}

#[tokio::test]
async fn test_role_mismatch_is_403_forbidden() {
    let app = setup_test_app(lazy_pool());

    let token = create_token(Uuid::new_v4(), UserRole::Student, &test_jwt_config()).unwrap();

    let request = Request::builder()
        .uri("/api/auth/protected-admin")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await, json!({ "message": "Forbidden" }));
}

#[tokio::test]
async fn test_matching_role_passes_both_gates() {
    let app = setup_test_app(lazy_pool());

    let token = create_token(Uuid::new_v4(), UserRole::Student, &test_jwt_config()).unwrap();

    let request = Request::builder()
        .uri("/api/auth/protected-student")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Welcome, Student!" })
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_returns_token_and_sanitized_user(pool: PgPool) {
    let app = setup_test_app(pool);
    let email = generate_unique_email();

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/register")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": email,
                "password": "testpass123",
                "firstName": "Ada",
                "lastName": "Byron",
                "role": "student"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["email"], json!(email));
    assert_eq!(body["user"]["firstName"], json!("Ada"));
    assert_eq!(body["user"]["role"], json!("student"));
    assert!(body["user"].get("password").is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_round_trip(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let email = generate_unique_email();
    let user = create_test_user(&mut tx, &email, "testpass123", "student").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool);

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": email,
                "password": "testpass123"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["id"], json!(user.id.to_string()));
    assert!(body["user"].get("password").is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_wrong_password_and_unknown_email_are_indistinguishable(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let email = generate_unique_email();
    create_test_user(&mut tx, &email, "the_real_password", "student").await;
    tx.commit().await.unwrap();

    let wrong_password = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": email,
                "password": "not_the_password"
            }))
            .unwrap(),
        ))
        .unwrap();

    let unknown_email = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": generate_unique_email(),
                "password": "the_real_password"
            }))
            .unwrap(),
        ))
        .unwrap();

    let first = setup_test_app(pool.clone()).oneshot(wrong_password).await.unwrap();
    let second = setup_test_app(pool).oneshot(unknown_email).await.unwrap();

    assert_eq!(first.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(second.status(), StatusCode::UNAUTHORIZED);

    let expected = json!({ "message": "Invalid credentials" });
    assert_eq!(body_json(first).await, expected);
    assert_eq!(body_json(second).await, expected);
}
