use dotenvy::dotenv;

use learnbyte::logging::init_tracing;
use learnbyte::router::init_router;
use learnbyte::state::init_app_state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing();

    let state = init_app_state().await?;
    let app = init_router(state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!("Server running on http://localhost:{port}");
    tracing::info!("Swagger UI available at http://localhost:{port}/swagger-ui");
    axum::serve(listener, app).await?;

    Ok(())
}
