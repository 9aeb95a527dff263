// src/config.rs
// =============================================================================
// Configuration for the proxy endpoint.
//
// The token is not read from the environment inside the request handler.
// It is loaded once (from CLI flags, the environment or a .env file) and
// handed to the endpoint when it is built.
//
// A missing token is allowed here: the server still starts and every lookup
// answers with a 500 explaining what is missing.
// =============================================================================

use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

/// Environment variable holding the GitHub personal access token.
pub const TOKEN_ENV_VAR: &str = "GITHUB_PERSONAL_ACCESS_TOKEN";

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Sent as `User-Agent` on every upstream request.
pub const DEFAULT_USER_AGENT: &str = "github-user-lookup";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone)]
pub struct ProxyConfig {
    /// Bearer token for the GitHub API, `None` when not configured
    pub token: Option<String>,
    /// Base URL of the GitHub REST API
    pub api_base: Url,
    /// Upper bound on a single upstream request
    pub timeout: Duration,
    pub user_agent: String,
}

impl ProxyConfig {
    // Builds a config with default upstream settings
    //
    // An empty token is treated as missing
    pub fn new(token: Option<String>) -> Result<Self> {
        let api_base = Url::parse(DEFAULT_API_BASE).context("Invalid default API base URL")?;

        Ok(Self {
            token: token.filter(|t| !t.is_empty()),
            api_base,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    pub fn with_api_base(mut self, api_base: &str) -> Result<Self> {
        self.api_base =
            Url::parse(api_base).with_context(|| format!("Invalid API base URL: {}", api_base))?;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

// Keeps the token out of logs and panic messages
impl fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("api_base", &self.api_base.as_str())
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
