// src/client/fetcher.rs
// =============================================================================
// Calls GET /api/github/user on a running proxy server.
//
// A non-OK answer becomes a FetchError whose message follows the same policy
// the proxy uses, so the text a user sees is consistent end to end:
//   1. The body's `error` field
//   2. The body's `message` field
//   3. "User not found" for 404, "Request failed" for anything else
// =============================================================================

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::github::{GitHubErrorBody, GitHubUser};
use crate::validate::ValidatedUsername;

const CLIENT_TIMEOUT: Duration = Duration::from_secs(30);

/// A failed lookup, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    /// HTTP status, None for transport failures
    pub status: Option<u16>,
    pub message: String,
}

impl FetchError {
    fn transport(error: reqwest::Error) -> Self {
        let message = error.to_string();
        Self {
            status: None,
            message: if message.is_empty() {
                "Request failed".to_string()
            } else {
                message
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProfileFetcher {
    http: Client,
    /// <endpoint>/api/github/user, without a query string
    lookup_url: Url,
}

impl ProfileFetcher {
    // Parameters:
    //   endpoint: base URL of the proxy server, e.g. "http://127.0.0.1:3000"
    pub fn new(endpoint: &str) -> Result<Self> {
        let mut lookup_url =
            Url::parse(endpoint).with_context(|| format!("Invalid endpoint URL: {}", endpoint))?;
        lookup_url
            .path_segments_mut()
            .map_err(|_| anyhow!("Endpoint URL cannot carry a path: {}", endpoint))?
            .pop_if_empty()
            .extend(["api", "github", "user"]);

        let http = Client::builder()
            .timeout(CLIENT_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, lookup_url })
    }

    pub fn request_url(&self, username: &ValidatedUsername) -> Url {
        let mut url = self.lookup_url.clone();
        url.query_pairs_mut().append_pair("username", username.as_str());
        url
    }

    pub async fn fetch(&self, username: &ValidatedUsername) -> Result<GitHubUser, FetchError> {
        let response = self
            .http
            .get(self.request_url(username))
            .send()
            .await
            .map_err(FetchError::transport)?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError {
                status: Some(status),
                message: failure_message(status, &body),
            });
        }

        response.json::<GitHubUser>().await.map_err(FetchError::transport)
    }
}

// Picks the message for a non-OK proxy answer
pub fn failure_message(status: u16, body: &str) -> String {
    let parsed = serde_json::from_str::<GitHubErrorBody>(body).ok();

    match parsed.as_ref().and_then(GitHubErrorBody::best_message) {
        Some(message) => message.to_string(),
        None if status == 404 => "User not found".to_string(),
        None => "Request failed".to_string(),
    }
}
