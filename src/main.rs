use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::limit::RequestBodyLimitLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use underwriter_api::api::routes;
use underwriter_api::config::Config;
use underwriter_api::core::generator::CaseGenerator;
use underwriter_api::core::store::CaseStore;
use underwriter_api::handlers::AppState;

/// Main entry point for the application.
///
/// Initializes tracing and configuration, generates the case collection once,
/// then serves it until the process exits.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "underwriter_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded successfully");

    // Generate the served collection; it is never modified afterwards
    let cases = CaseGenerator::new(config.case_seed).generate(config.case_count);
    let store = CaseStore::new(cases);
    match config.case_seed {
        Some(seed) => tracing::info!("Generated {} cases (seed {})", store.len(), seed),
        None => tracing::info!("Generated {} cases (unseeded)", store.len()),
    }

    let app_state = Arc::new(AppState::new(store, config.clone()));

    // Configure per-IP rate limiter; one token is replenished every interval
    let replenish_ms = (1000 / config.rate_limit_per_second).max(1);
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(replenish_ms)
            .burst_size(config.rate_limit_burst)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .ok_or_else(|| anyhow::anyhow!("Invalid rate limit configuration"))?,
    );

    // Case routes get the security layers; health and docs bypass them
    let api = routes::api_routes().layer(
        ServiceBuilder::new()
            // GET-only API, so bodies are never expected
            .layer(RequestBodyLimitLayer::new(64 * 1024))
            .layer(GovernorLayer {
                config: governor_conf,
            }),
    );

    let app = routes::build_router_with(app_state, api);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
