mod model;
mod server;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    tracing::info!("Database connected and migrated");

    let normalizer = config.normalizer();
    tracing::info!(
        "Normalizing time slots to {} ({:?})",
        normalizer.reference_offset(),
        normalizer.policy()
    );

    let app = router::router()
        .with_state(AppState::new(db.clone(), normalizer))
        .layer(TraceLayer::new_for_http())
        .layer(startup::cors_layer());

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    db.close().await?;
    tracing::info!("Server stopped");

    Ok(())
}
