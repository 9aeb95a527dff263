// src/github/upstream.rs
// =============================================================================
// This module calls the GitHub REST API for a single user profile.
//
// Strategy:
// - Build the URL from the configured API base, path-encoding the username
// - Send exactly one GET with the headers GitHub expects
// - Hand back the raw status and body text, the proxy decides what they mean
//
// There is no retry and no cache. The client carries a timeout so a stalled
// upstream cannot hang the caller forever.
// =============================================================================

use anyhow::{anyhow, Context, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION, CACHE_CONTROL, USER_AGENT};
use reqwest::Client;
use url::Url;

use crate::config::ProxyConfig;
use crate::validate::ValidatedUsername;

pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";
pub const GITHUB_API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// Status and body of one upstream answer, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: String,
}

impl UpstreamReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone)]
pub struct GitHubApi {
    http: Client,
    base: Url,
    user_agent: String,
}

impl GitHubApi {
    pub fn new(config: &ProxyConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build GitHub HTTP client")?;

        Ok(Self {
            http,
            base: config.api_base.clone(),
            user_agent: config.user_agent.clone(),
        })
    }

    // Builds <api_base>/users/<username>
    //
    // Example:
    //   "https://api.github.com" + "octocat" -> "https://api.github.com/users/octocat"
    pub fn user_url(&self, username: &ValidatedUsername) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("API base URL cannot carry a path: {}", self.base))?
            .pop_if_empty()
            .push("users")
            .push(username.as_str());
        Ok(url)
    }

    // Fetches one user profile
    //
    // Parameters:
    //   username: already validated, never raw user input
    //   token: bearer token sent as the Authorization header
    //
    // Returns: the upstream status and body, or the transport error
    pub async fn get_user(&self, username: &ValidatedUsername, token: &str) -> Result<UpstreamReply> {
        let url = self.user_url(username)?;
        tracing::debug!(%url, "Requesting GitHub user");

        let response = self
            .http
            .get(url)
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .header(GITHUB_API_VERSION_HEADER, GITHUB_API_VERSION)
            .header(USER_AGENT, self.user_agent.as_str())
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;  // Connection, DNS and header-timeout failures end here

        let status = response.status().as_u16();
        let body = if response.status().is_success() {
            // A profile we cannot read in full is a transport failure
            // (timeout, connection dropped mid-body)
            response.text().await?
        } else {
            // An error body we cannot read is treated like an empty one
            response.text().await.unwrap_or_default()
        };

        Ok(UpstreamReply { status, body })
    }
}
