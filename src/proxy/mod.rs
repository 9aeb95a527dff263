// src/proxy/mod.rs
// =============================================================================
// This module is the server side of a username lookup.
//
// It turns an optional `username` query value into either the upstream
// profile JSON or a `{ "error": ... }` envelope with a status code.
//
// Submodules:
// - error: The failure taxonomy and its status mapping
// - endpoint: The lookup pipeline itself
// =============================================================================

mod endpoint;
mod error;

pub use endpoint::{upstream_error_message, ProxyEndpoint, ProxyResponse};
pub use error::{ErrorEnvelope, ProxyError};
