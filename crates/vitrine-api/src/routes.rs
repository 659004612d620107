//! HTTP route handlers.
//!
//! All request-level failures are answered inline with the fixed response
//! shapes the site frontend expects; nothing here is fatal to the server
//! process.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use vitrine_contact::ContactLog;
use vitrine_content::ContentStore;
use vitrine_core::{ContactRequest, ContentKey};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Read-only content document store
    pub store: Arc<ContentStore>,
    /// Contact submission log
    pub log: Arc<ContactLog>,
}

impl AppState {
    /// Creates state over the given store and log.
    pub fn new(store: ContentStore, log: ContactLog) -> Self {
        Self {
            store: Arc::new(store),
            log: Arc::new(log),
        }
    }
}

/// Builds the `/api` router (no static asset services).
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/projects", get(projects))
        .route("/api/services", get(services))
        .route("/api/contact", post(contact))
        .route("/api/health", get(health))
        .with_state(state)
}

async fn projects(State(state): State<AppState>) -> Response {
    content_response(&state, ContentKey::Projects).await
}

async fn services(State(state): State<AppState>) -> Response {
    content_response(&state, ContentKey::Services).await
}

/// Passes a content document through verbatim, or answers the fixed error
/// shape with status 500. Adding an endpoint for another [`ContentKey`] is
/// one route line plus a one-line handler.
async fn content_response(state: &AppState, key: ContentKey) -> Response {
    match state.store.load(key).await {
        Ok(document) => Json(document).into_response(),
        Err(error) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": error.to_string() })),
        )
            .into_response(),
    }
}

/// Incoming contact payload.
///
/// Fields are optional so that missing keys reach the missing-fields check
/// instead of being rejected by the JSON extractor.
#[derive(Debug, Default, Deserialize)]
struct ContactPayload {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

fn filled(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

async fn contact(State(state): State<AppState>, Json(payload): Json<ContactPayload>) -> Response {
    let (name, email, message) = match (
        filled(payload.name),
        filled(payload.email),
        filled(payload.message),
    ) {
        (Some(name), Some(email), Some(message)) => (name, email, message),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Missing fields" })),
            )
                .into_response();
        }
    };

    match state
        .log
        .append(ContactRequest::new(name, email, message))
        .await
    {
        Ok(message) => {
            tracing::info!(email = %message.email, "contact message received");
            Json(json!({ "ok": true, "message": "Message received (demo)" })).into_response()
        }
        Err(error) => {
            tracing::error!(%error, "failed to record contact message");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Failed to record message" })),
            )
                .into_response()
        }
    }
}

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Fixed `"ok"` marker
    pub status: String,
    /// Current server time, RFC 3339
    pub time: String,
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        time: Utc::now().to_rfc3339(),
    })
}

// ============================================================================
// Tests
// ============================================================================
