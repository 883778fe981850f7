//! FlexiStay Server - Short-term apartment rental booking
//!
//! REST API server for browsing rental units and booking them by
//! duration tier.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flexistay_server::{api, catalog::Catalog, config::AppConfig, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("flexistay_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting FlexiStay Server v{}", env!("CARGO_PKG_VERSION"));

    // Seed the unit catalog
    let seed_path = &config.catalog.seed_path;
    let catalog = if std::path::Path::new(seed_path).exists() {
        Catalog::load(seed_path).expect("Failed to load unit catalog")
    } else {
        tracing::warn!("Seed file {} not found, using built-in units", seed_path);
        Catalog::with_default_units()
    };

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create services
    let services = Services::new(Arc::new(catalog), config.booking.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(server_host.parse().expect("Invalid host address"), server_port);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Units (catalog)
        .route("/units", get(api::units::list_units))
        .route("/units/:id", get(api::units::get_unit))
        .route("/units/:id/quotes", get(api::units::list_unit_quotes))
        // Bookings
        .route("/bookings", post(api::bookings::open_booking))
        .route("/bookings/current", get(api::bookings::get_current_booking))
        .route("/bookings/current", patch(api::bookings::update_booking_field))
        .route("/bookings/current", delete(api::bookings::close_booking))
        .route("/bookings/current/quote", get(api::bookings::get_booking_quote))
        .route("/bookings/current/submit", post(api::bookings::submit_booking))
        // Notifications
        .route(
            "/notifications/stream",
            get(api::notifications::stream_notifications),
        )
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
