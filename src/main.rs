use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;
use yoga_coach::api::routes::create_routes;
use yoga_coach::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    // RUST_LOG overrides the configured level when set.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let app = create_routes();

    let listener = TcpListener::bind(config.server_address()).await?;
    info!("Yoga coach server starting on http://{}", config.server_address());
    info!(
        "Health check available at http://{}/health",
        config.server_address()
    );

    axum::serve(listener, app).await?;

    Ok(())
}
