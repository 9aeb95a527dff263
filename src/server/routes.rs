// src/server/routes.rs
// =============================================================================
// Request handlers for the axum router.
// =============================================================================

use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::proxy::{ProxyEndpoint, ProxyResponse};

// GET /api/github/user
//
// Only the first `username` pair counts when the parameter is repeated
pub async fn github_user(
    State(endpoint): State<Arc<ProxyEndpoint>>,
    RawQuery(query): RawQuery,
) -> Response {
    let username = query.as_deref().and_then(first_username);

    let ProxyResponse { status, body } = endpoint.respond(username.as_deref()).await;
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);

    (status, Json(body)).into_response()
}

fn first_username(query: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "username")
        .map(|(_, value)| value.into_owned())
}

/// Body of the health check.
#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub message: String,
    /// ISO-8601 in UTC with millisecond precision
    pub timestamp: String,
}

// GET /api/test
pub async fn health() -> Json<Health> {
    Json(Health {
        message: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
