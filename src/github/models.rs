// src/github/models.rs
// =============================================================================
// Data shapes returned by the GitHub REST API.
//
// The proxy passes successful profiles through untouched as raw JSON.
// These typed structs are what the client side deserializes into so the
// result view can render individual fields.
// =============================================================================

use serde::{Deserialize, Serialize};

/// A GitHub user profile from the `/users/{username}` API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub id: u64,
    /// May be empty, the result view substitutes a placeholder
    #[serde(default)]
    pub avatar_url: String,
    pub html_url: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub twitter_username: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub public_gists: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Error body GitHub sends with non-2xx responses.
///
/// Our own proxy uses the `error` field, GitHub uses `message`, so both are
/// optional and callers check them in that order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitHubErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub documentation_url: Option<String>,
}

impl GitHubErrorBody {
    // Returns the first non-empty of `error` then `message`
    pub fn best_message(&self) -> Option<&str> {
        [self.error.as_deref(), self.message.as_deref()]
            .into_iter()
            .flatten()
            .find(|m| !m.is_empty())
    }
}
