// src/validate/mod.rs
// =============================================================================
// This module decides whether a GitHub username is well-formed.
//
// The same rules are used in two places:
// - The terminal form, which shows the specific rule that failed
// - The proxy endpoint, which rejects bad input before any network call
//
// Rust concepts:
// - Newtypes: A struct wrapping a String so the type proves validation happened
// - Enums with thiserror: One variant per rule, each with its own message
// =============================================================================

mod rules;

pub use rules::{validate_username, UsernameError, ValidatedUsername, MAX_USERNAME_LEN};
