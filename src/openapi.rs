//! OpenAPI document and Swagger UI.

use axum::{http::StatusCode, response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::errors::ErrorResponse;
use crate::handlers;
use crate::models::*;

/// Path the generated OpenAPI document is served from.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Underwriter API",
        description = "Synthetic loan-underwriting cases for frontend development"
    ),
    paths(
        handlers::health,
        handlers::list_cases,
        handlers::filter_cases,
        handlers::get_case,
        handlers::debug_info,
    ),
    components(schemas(
        CustomerCase,
        CaseStatus,
        CaseDetails,
        BasicsDetails,
        BankingDetails,
        Transaction,
        BureauDetails,
        PaymentHistory,
        PaymentStatus,
        FinancialDetails,
        PdDetails,
        AdditionalDetails,
        Document,
        RouteInfo,
        DebugSnapshot,
        ErrorResponse,
    )),
    tags(
        (name = "cases", description = "Read-only case lookups"),
        (name = "service", description = "Health and diagnostics")
    )
)]
pub struct ApiDoc;

/// Serves the generated OpenAPI document as JSON.
pub async fn serve_openapi_spec() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Serves the Swagger UI HTML page.
///
/// The page loads Swagger UI from a CDN and points it at
/// [`OPENAPI_JSON_PATH`].
pub async fn serve_swagger_ui() -> impl IntoResponse {
    let html = format!(
        r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Underwriter API - Swagger UI</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
    <style>
        body {{ margin: 0; padding: 0; }}
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = function() {{
            window.ui = SwaggerUIBundle({{
                url: "{spec_url}",
                dom_id: '#swagger-ui',
                deepLinking: true,
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                layout: "StandaloneLayout"
            }});
        }};
    </script>
</body>
</html>
"#,
        spec_url = OPENAPI_JSON_PATH
    );
    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "text/html; charset=utf-8")],
        html,
    )
}
