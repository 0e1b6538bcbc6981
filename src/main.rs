mod model;
mod server;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let state = AppState::new(db, config.jwt_secret.clone());

    let listener = tokio::net::TcpListener::bind(&config.server_addr).await?;
    tracing::info!("Starting server on {}", config.server_addr);

    axum::serve(listener, router::app(state))
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}
