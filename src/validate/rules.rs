// src/validate/rules.rs
// =============================================================================
// The five username rules, checked in a fixed order.
//
// Order matters: the first rule that fails is the one reported.
//   1. Empty after trimming
//   2. Longer than 39 characters
//   3. Characters outside [A-Za-z0-9-]
//   4. Starts or ends with a hyphen
//   5. Two consecutive hyphens
// =============================================================================

use std::fmt;

use thiserror::Error;

/// GitHub's own upper bound on login length.
pub const MAX_USERNAME_LEN: usize = 39;

/// A single rule violation. The Display text is what the form shows inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UsernameError {
    #[error("Username is required")]
    Required,
    #[error("Max length is 39")]
    TooLong,
    #[error("Only letters, numbers, and hyphens")]
    InvalidCharacters,
    #[error("Cannot start or end with hyphen")]
    EdgeHyphen,
    #[error("No consecutive hyphens")]
    ConsecutiveHyphens,
}

/// A trimmed username that passed every rule.
///
/// The only way to build one is `validate_username`, so holding a
/// `ValidatedUsername` is proof the value is safe to send upstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedUsername(String);

impl ValidatedUsername {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidatedUsername {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ValidatedUsername {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Validates a candidate username
//
// Parameters:
//   candidate: raw text typed by the user or sent in a query string
//
// Returns: the trimmed, validated username or the first rule it breaks
//
// Example:
//   validate_username("  octocat ") -> Ok("octocat")
//   validate_username("-bad")       -> Err(UsernameError::EdgeHyphen)
pub fn validate_username(candidate: &str) -> Result<ValidatedUsername, UsernameError> {
    let trimmed = candidate.trim();

    if trimmed.is_empty() {
        return Err(UsernameError::Required);
    }

    // Count characters, not bytes, so multi-byte input gets the length
    // message rather than being cut off mid-character
    if trimmed.chars().count() > MAX_USERNAME_LEN {
        return Err(UsernameError::TooLong);
    }

    if !trimmed.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(UsernameError::InvalidCharacters);
    }

    if trimmed.starts_with('-') || trimmed.ends_with('-') {
        return Err(UsernameError::EdgeHyphen);
    }

    if trimmed.contains("--") {
        return Err(UsernameError::ConsecutiveHyphens);
    }

    Ok(ValidatedUsername(trimmed.to_string()))
}
