// src/lib.rs
// =============================================================================
// Library root. The binary in main.rs is a thin shell over these modules.
//
// Modules:
// - validate: username rules shared by the form and the proxy
// - config: proxy settings (token, API base, timeout)
// - github: GitHub profile models and the upstream client
// - proxy: the lookup endpoint logic and its error taxonomy
// - server: axum routes for the proxy and the health check
// - client: proxy client and the request coordinator
// - form: username form and result view
// - cli: command-line definitions
// =============================================================================

// Module declarations - tells Rust about our other source files
pub mod cli;           // src/cli.rs - command-line parsing
pub mod client;        // src/client/ - proxy client and request coordinator
pub mod config;        // src/config.rs - proxy configuration
pub mod form;          // src/form/ - username form and result view
pub mod github;        // src/github/ - GitHub API models and client
pub mod proxy;         // src/proxy/ - the lookup endpoint logic
pub mod server;        // src/server/ - axum routes
pub mod validate;      // src/validate/ - username rules

// Fake servers for the module tests
#[cfg(test)]
mod testing;           // src/testing.rs
