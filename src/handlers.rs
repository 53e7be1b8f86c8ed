use crate::config::Config;
use crate::errors::{AppError, ErrorResponse};
use crate::models::*;
use crate::store::CaseStore;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cases generated at startup. Never mutated afterwards.
    pub store: CaseStore,
    /// Application configuration.
    pub config: Config,
}

impl AppState {
    pub fn new(store: CaseStore, config: Config) -> Self {
        Self { store, config }
    }
}

/// Health check endpoint.
///
/// Returns the service status, version, and the size of the served collection.
#[utoipa::path(
    get,
    path = "/health",
    tag = "service",
    responses((status = 200, description = "Service is healthy"))
)]
pub async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "underwriter-api",
            "version": env!("CARGO_PKG_VERSION"),
            "casesCount": state.store.len(),
        })),
    )
}

/// GET /cases
///
/// Returns every case in generation order. An optional `status` query
/// parameter narrows the result exactly like `/cases/filter/{status}`.
#[utoipa::path(
    get,
    path = "/cases",
    tag = "cases",
    params(CaseListQuery),
    responses((status = 200, description = "All cases", body = [CustomerCase]))
)]
pub async fn list_cases(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CaseListQuery>,
) -> Json<Vec<CustomerCase>> {
    tracing::info!("GET /cases - params: {:?}", params);

    let cases: Vec<CustomerCase> = match params.status.as_deref() {
        Some(status) => state.store.by_status(status).into_iter().cloned().collect(),
        None => state.store.all().to_vec(),
    };

    Json(cases)
}

/// GET /cases/filter/:status
///
/// Returns the cases whose status equals `status` exactly. Unknown statuses
/// yield an empty array.
#[utoipa::path(
    get,
    path = "/cases/filter/{status}",
    tag = "cases",
    params(("status" = String, Path, description = "Exact status: assigned, draft or submitted")),
    responses((status = 200, description = "Matching cases, possibly none", body = [CustomerCase]))
)]
pub async fn filter_cases(
    State(state): State<Arc<AppState>>,
    Path(status): Path<String>,
) -> Json<Vec<CustomerCase>> {
    tracing::info!("GET /cases/filter/{}", status);

    let cases: Vec<CustomerCase> = state.store.by_status(&status).into_iter().cloned().collect();
    tracing::debug!("{} cases with status {}", cases.len(), status);

    Json(cases)
}

/// GET /cases/:case_id
///
/// Returns a single case. The literal `filter` is never treated as an id.
#[utoipa::path(
    get,
    path = "/cases/{case_id}",
    tag = "cases",
    params(("case_id" = String, Path, description = "Case identifier, e.g. CASE0001")),
    responses(
        (status = 200, description = "The case", body = CustomerCase),
        (status = 404, description = "No case with that id", body = ErrorResponse)
    )
)]
pub async fn get_case(
    State(state): State<Arc<AppState>>,
    Path(case_id): Path<String>,
) -> Result<Json<CustomerCase>, AppError> {
    tracing::info!("GET /cases/{}", case_id);

    let case = state.store.get(&case_id)?;
    Ok(Json(case.clone()))
}

/// GET /debug
///
/// Diagnostic view: case count, all ids, and the first case.
#[utoipa::path(
    get,
    path = "/debug",
    tag = "service",
    responses((status = 200, description = "Snapshot of the generated collection", body = DebugSnapshot))
)]
pub async fn debug_info(State(state): State<Arc<AppState>>) -> Json<DebugSnapshot> {
    tracing::info!("GET /debug");
    Json(state.store.snapshot())
}
