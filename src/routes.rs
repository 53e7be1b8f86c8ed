//! Router assembly.
//!
//! Case routes are mounted twice: at the root and under `/api`, which is the
//! prefix the frontend prototype calls. The static `filter` segment always
//! outranks the `:case_id` capture in axum's matcher, so the two sibling
//! routes cannot collide whatever their declaration order.

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers::{self, AppState};
use crate::openapi::{self, OPENAPI_JSON_PATH};

/// Read-only case lookups plus the debug snapshot.
pub fn case_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/cases", get(handlers::list_cases))
        .route("/cases/filter/:status", get(handlers::filter_cases))
        .route("/cases/:case_id", get(handlers::get_case))
        .route("/debug", get(handlers::debug_info))
}

/// Case routes at the root and under `/api`.
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(case_routes())
        .nest("/api", case_routes())
}

/// Complete application router with the default API routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    build_router_with(state, api_routes())
}

/// Complete application router around `api`, which callers may wrap in
/// extra middleware (rate limiting) first. Health and docs stay outside it.
pub fn build_router_with(state: Arc<AppState>, api: Router<Arc<AppState>>) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/docs", get(openapi::serve_swagger_ui))
        .route(OPENAPI_JSON_PATH, get(openapi::serve_openapi_spec))
        .merge(api)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// CORS for the configured frontend origins. Origins are validated when the
/// config is loaded; anything unparsable here is skipped.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
