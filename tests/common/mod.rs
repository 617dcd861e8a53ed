use learnbyte::config::cors::CorsConfig;
use learnbyte::config::jwt::JwtConfig;
use learnbyte::router::init_router;
use learnbyte::state::AppState;
use learnbyte::utils::password::hash_password;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "integration_test_secret";

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("user-{}@example.com", Uuid::new_v4())
}

#[allow(dead_code)]
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        token_expiry: 3600,
    }
}

/// Builds the full application against the given pool. Configuration is
/// injected directly rather than read from the environment, so tests do not
/// depend on (or leak into) the process env.
#[allow(dead_code)]
pub fn setup_test_app(pool: PgPool) -> axum::Router {
    let state = AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
    };
    init_router(state)
}

/// Create a test user with the given role ("admin", "student", "instructor",
/// or "portfolio").
#[allow(dead_code)]
pub async fn create_test_user(
    tx: &mut Transaction<'_, Postgres>,
    email: &str,
    password: &str,
    role: &str,
) -> TestUser {
    let hashed = hash_password(password).unwrap();

    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO users (email, password, first_name, last_name, role)
         VALUES ($1, $2, 'Test', 'User', $3::user_role)
         RETURNING id",
    )
    .bind(email)
    .bind(&hashed)
    .bind(role)
    .fetch_one(&mut **tx)
    .await
    .unwrap();

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[allow(dead_code)]
pub async fn create_test_course(tx: &mut Transaction<'_, Postgres>, instructor_id: Uuid) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO courses (title, description, course_code, capacity, instructor_id)
         VALUES ('Systems Programming', 'An introductory systems course', 'SP101', 30, $1)
         RETURNING id",
    )
    .bind(instructor_id)
    .fetch_one(&mut **tx)
    .await
    .unwrap()
}
