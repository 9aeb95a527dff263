// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - Typed profile and error shapes (models.rs)
// - A single-request client for GET /users/{username} (upstream.rs)
// =============================================================================

mod models;
mod upstream;

pub use models::{GitHubErrorBody, GitHubUser};
pub use upstream::{GitHubApi, UpstreamReply};
