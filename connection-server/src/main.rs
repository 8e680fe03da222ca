use connection_server::booking::BookingClient;
use connection_server::config::AppConfig;
use connection_server::rates::RateClient;
use connection_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("connection_server=info")),
        )
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    let booking = BookingClient::new(config.booking.clone()).expect("Failed to create booking client");
    let rates = RateClient::new(config.rates.clone()).expect("Failed to create rate client");

    info!(booking = %config.booking.base_url, rates = %config.rates.base_url, "upstream services");

    let state = AppState::new(booking, rates);
    let app = create_router(state, &config.static_dir);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");

    info!("Connection server listening on http://{addr}");
    info!("  GET /connections?from=<mask>&to=<mask>&dep=<epoch-ms>[&age=<n>][&class=<n>]");
    info!("  GET /health");
    info!("Static files served from {}", config.static_dir.display());

    axum::serve(listener, app).await.expect("Server error");
}
