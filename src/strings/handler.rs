//! HTTP handlers for the strings API
//!
//! Provides 5 REST endpoints:
//! - POST   /strings                — analyze and store a string
//! - GET    /strings                — list with optional filters
//! - GET    /strings/natural        — list via natural-language query
//! - GET    /strings/:string_value  — lookup by raw value or content hash
//! - DELETE /strings/:string_value  — delete by raw value or content hash
//!
//! Handlers own the orchestration: request-shape validation, uniqueness
//! pre-checks before create, conflict detection on the natural path, and
//! the mapping of error kinds to response statuses.

use crate::analyzer;
use crate::error::{Error, Result};
use crate::filter::{apply_filters, FilterSet};
use crate::nlq::parse_natural_query;
use crate::strings::store::StringStore;
use crate::strings::types::{ApiError, ListResponse, NaturalListResponse, StringRecord};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Path segments matching this are treated as content-hash lookups
static HEX_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-f0-9]{64}$").expect("valid pattern"));

/// Shared state for string handlers
#[derive(Clone)]
pub struct StringsState {
    pub store: Arc<StringStore>,
}

/// Create the strings router with all REST endpoints
pub fn strings_router(state: StringsState) -> Router {
    Router::new()
        .route("/strings", post(create_string))
        .route("/strings", get(list_strings))
        .route("/strings/natural", get(natural_filter))
        .route("/strings/:string_value", get(get_string))
        .route("/strings/:string_value", delete(delete_string))
        .with_state(state)
}

/// Dual lookup rule: a 64-hex-digit segment is an id, anything else a raw
/// value.
async fn lookup(store: &StringStore, param: &str) -> Option<StringRecord> {
    if HEX_ID.is_match(param) {
        store.find_by_id(param).await
    } else {
        store.find_by_value(param).await
    }
}

/// Map an error kind to its response status and body.
///
/// Unexpected failures (IO, serialization) are logged for operators and
/// surface as a generic 500 with no internal detail.
fn error_to_response(err: Error) -> Response {
    let (status, body) = match err {
        Error::Validation(message) => (StatusCode::BAD_REQUEST, ApiError::bad_request(message)),
        Error::Type(message) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::unprocessable(message),
        ),
        Error::SemanticConflict(message) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::unprocessable(message),
        ),
        Error::NotFound(message) => (StatusCode::NOT_FOUND, ApiError::not_found(message)),
        Error::Conflict(message) => (StatusCode::CONFLICT, ApiError::conflict(message)),
        err => {
            tracing::error!("request failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::internal("Internal server error"),
            )
        }
    };
    (status, Json(body)).into_response()
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /strings
async fn create_string(
    State(state): State<StringsState>,
    Json(body): Json<serde_json::Value>,
) -> Response {
    match try_create(&state, &body).await {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(err) => error_to_response(err),
    }
}

async fn try_create(state: &StringsState, body: &serde_json::Value) -> Result<StringRecord> {
    let raw = body
        .get("value")
        .ok_or_else(|| Error::Validation("Missing \"value\" field".to_string()))?;
    let value = raw
        .as_str()
        .ok_or_else(|| Error::Type("\"value\" must be a string".to_string()))?;

    // Existence pre-check by value and by content hash; the store itself
    // does not enforce uniqueness.
    let hash = analyzer::sha256_hex(value);
    if state.store.find_by_value(value).await.is_some()
        || state.store.find_by_id(&hash).await.is_some()
    {
        return Err(Error::Conflict("String already exists".to_string()));
    }

    state.store.create(analyzer::analyze(value)).await
}

/// GET /strings/:string_value
async fn get_string(
    State(state): State<StringsState>,
    Path(string_value): Path<String>,
) -> Response {
    match lookup(&state.store, &string_value).await {
        Some(record) => (StatusCode::OK, Json(record)).into_response(),
        None => error_to_response(Error::NotFound(
            "String does not exist in the system".to_string(),
        )),
    }
}

/// GET /strings
async fn list_strings(
    State(state): State<StringsState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let filters = match FilterSet::from_query(&params) {
        Ok(filters) => filters,
        Err(err) => return error_to_response(err),
    };

    let all = state.store.all().await;
    let data = apply_filters(&all, &filters);
    let response = ListResponse {
        count: data.len(),
        data,
        filters_applied: filters,
    };
    (StatusCode::OK, Json(response)).into_response()
}

#[derive(Debug, Deserialize)]
struct NaturalQueryParams {
    query: Option<String>,
}

/// GET /strings/natural
async fn natural_filter(
    State(state): State<StringsState>,
    Query(params): Query<NaturalQueryParams>,
) -> Response {
    let parsed = params.query.as_deref().and_then(parse_natural_query);
    let Some(parsed) = parsed else {
        return error_to_response(Error::Validation(
            "Unable to parse natural language query".to_string(),
        ));
    };

    // The engine would just return an empty set here; the natural path
    // rejects the contradiction up front instead.
    if parsed.parsed_filters.has_length_conflict() {
        return error_to_response(Error::SemanticConflict(
            "Parsed filters conflict (min_length > max_length)".to_string(),
        ));
    }

    let all = state.store.all().await;
    let data = apply_filters(&all, &parsed.parsed_filters);
    let response = NaturalListResponse {
        count: data.len(),
        data,
        interpreted_query: parsed,
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// DELETE /strings/:string_value
async fn delete_string(
    State(state): State<StringsState>,
    Path(string_value): Path<String>,
) -> Response {
    let Some(record) = lookup(&state.store, &string_value).await else {
        return error_to_response(Error::NotFound("String not found".to_string()));
    };

    match state.store.delete_by_id(&record.id).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_to_response(err),
    }
}
