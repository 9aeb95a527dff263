// src/proxy/endpoint.rs
// =============================================================================
// The lookup pipeline behind GET /api/github/user.
//
// How it works:
// 1. Reject a missing username (400)
// 2. Trim and validate it (400, generic message)
// 3. Reject if no token is configured (500), before any network call
// 4. Call GitHub once
// 5. Normalize a non-2xx answer into { error } with GitHub's status
// 6. Pass a 2xx profile through untouched
// 7. Map transport failures to 500
//
// Each request is independent: the endpoint holds only read-only config
// and a reusable HTTP client.
// =============================================================================

use anyhow::Result;
use serde_json::Value;

use super::error::ProxyError;
use crate::config::ProxyConfig;
use crate::github::{GitHubApi, GitHubErrorBody};
use crate::validate::validate_username;

/// Status code and JSON body, ready to be written to the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyResponse {
    pub status: u16,
    pub body: Value,
}

#[derive(Debug, Clone)]
pub struct ProxyEndpoint {
    config: ProxyConfig,
    api: GitHubApi,
}

impl ProxyEndpoint {
    pub fn new(config: ProxyConfig) -> Result<Self> {
        let api = GitHubApi::new(&config)?;
        Ok(Self { config, api })
    }

    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }

    // Runs the full lookup
    //
    // Parameters:
    //   username: the raw query value, None when the parameter was absent
    //
    // Returns: the upstream profile JSON, or the error to report
    pub async fn lookup(&self, username: Option<&str>) -> Result<Value, ProxyError> {
        // An empty value is reported the same way as an absent one
        let raw = username
            .filter(|u| !u.is_empty())
            .ok_or(ProxyError::MissingUsername)?;

        // Same rules the form uses; the specific rule is only logged
        let username = validate_username(raw).map_err(|rule| {
            tracing::debug!(%rule, "Rejected username");
            ProxyError::InvalidUsername(rule)
        })?;

        // No token means no network call at all
        let token = self
            .config
            .token
            .as_deref()
            .ok_or(ProxyError::MissingToken)?;

        // One attempt, no retry. Timeouts and dropped connections land in
        // the map_err below as transport errors (500)
        let reply = self.api.get_user(&username, token).await.map_err(|e| {
            tracing::error!(username = %username, error = %e, "GitHub request failed");
            transport_error(e.to_string())
        })?;

        // Non-2xx: keep GitHub's status, normalize the message
        if !reply.is_success() {
            let message = upstream_error_message(reply.status, &reply.body);
            tracing::info!(username = %username, status = reply.status, %message, "GitHub returned an error");
            return Err(ProxyError::Upstream {
                status: reply.status,
                message,
            });
        }

        // 2xx: hand the profile back as parsed JSON, untouched
        serde_json::from_str(&reply.body).map_err(|e| {
            tracing::error!(username = %username, error = %e, "GitHub returned a non-JSON profile");
            transport_error(e.to_string())
        })
    }

    // Like lookup(), but flattened into the status + body pair we send back
    pub async fn respond(&self, username: Option<&str>) -> ProxyResponse {
        match self.lookup(username).await {
            Ok(profile) => ProxyResponse {
                status: 200,
                body: profile,
            },
            Err(e) => ProxyResponse {
                status: e.status(),
                body: serde_json::json!({ "error": e.envelope().error }),
            },
        }
    }
}

fn transport_error(message: String) -> ProxyError {
    if message.is_empty() {
        ProxyError::Transport("Unknown error".to_string())
    } else {
        ProxyError::Transport(message)
    }
}

// Picks the message for a non-2xx GitHub answer
//
// Order of preference:
//   1. The body's `error` field
//   2. The body's `message` field
//   3. A fallback based on the status code
//
// A body that is not JSON is logged and treated as absent.
pub fn upstream_error_message(status: u16, body: &str) -> String {
    let parsed = match serde_json::from_str::<GitHubErrorBody>(body) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::warn!(status, body, error = %e, "Failed to parse GitHub error response");
            None
        }
    };

    if let Some(message) = parsed.as_ref().and_then(GitHubErrorBody::best_message) {
        return message.to_string();
    }

    match status {
        404 => "User not found".to_string(),
        403 => "Access forbidden or rate limited".to_string(),
        other => format!("GitHub API error: {}", other),
    }
}
