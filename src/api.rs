//! Unified API router for stringvault
//!
//! Builds the complete axum application: the strings router, a root-level
//! health probe, a JSON 404 fallback for unmatched routes, CORS, and
//! request tracing.
//!
//! ## Endpoint Map
//!
//! | Route                      | Description                          |
//! |----------------------------|--------------------------------------|
//! | `GET /health`              | Load balancer health probe           |
//! | `POST /strings`            | Analyze and store a string           |
//! | `GET /strings`             | Filtered listing                     |
//! | `GET /strings/natural`     | Natural-language filtered listing    |
//! | `GET /strings/:value`      | Lookup by raw value or content hash  |
//! | `DELETE /strings/:value`   | Delete by raw value or content hash  |

use crate::strings::types::ApiError;
use crate::strings::{strings_router, StringsState};
use axum::{
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the complete stringvault HTTP application
pub fn build_app(state: StringsState, cors_origins: &[String]) -> Router {
    let cors = build_cors(cors_origins);

    Router::new()
        .route("/health", get(health_check))
        .merge(strings_router(state))
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Generic payload for unmatched routes
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::not_found("Not Found")),
    )
}

fn build_cors(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        let parsed: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        cors.allow_origin(parsed)
    }
}
