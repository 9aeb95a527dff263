// src/proxy/error.rs
// =============================================================================
// Every way a lookup can fail, and the HTTP status each one maps to.
//
//   Input error          -> 400 (missing or malformed username)
//   Configuration error  -> 500 (no token configured)
//   Upstream error       -> GitHub's own status, normalized message
//   Transport error      -> 500 (network failure, unreadable body)
// =============================================================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::TOKEN_ENV_VAR;
use crate::validate::UsernameError;

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Missing 'username' query parameter")]
    MissingUsername,

    /// The rule that failed is kept for logging only, callers always see
    /// the same generic message
    #[error("Invalid username format")]
    InvalidUsername(#[source] UsernameError),

    #[error("Server is missing {}", TOKEN_ENV_VAR)]
    MissingToken,

    #[error("{message}")]
    Upstream { status: u16, message: String },

    #[error("{0}")]
    Transport(String),
}

impl ProxyError {
    pub fn status(&self) -> u16 {
        match self {
            ProxyError::MissingUsername | ProxyError::InvalidUsername(_) => 400,
            ProxyError::MissingToken | ProxyError::Transport(_) => 500,
            ProxyError::Upstream { status, .. } => *status,
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            error: self.to_string(),
        }
    }
}

/// The `{ "error": "..." }` body every failure is reported with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}
