// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - serve: run the HTTP proxy in front of the GitHub API
// - lookup: fill in the username form and print the result
//
// Rust concepts:
// - Derive macros: clap generates the parser from these types
// - env: a flag can fall back to an environment variable
// =============================================================================

use std::net::SocketAddr;

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS, TOKEN_ENV_VAR};

#[derive(Parser, Debug)]
#[command(
    name = "github-user-lookup",
    version = "0.1.0",
    about = "Look up GitHub users through a validating proxy",
    long_about = "github-user-lookup runs a small HTTP proxy in front of the GitHub users API \
                  and a terminal form that validates usernames before asking the proxy for a profile."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the proxy server
    ///
    /// Example: github-user-lookup serve --bind 0.0.0.0:3000
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        bind: SocketAddr,

        /// GitHub personal access token
        ///
        /// Without one the server still starts, but every lookup answers 500
        #[arg(long, env = TOKEN_ENV_VAR, hide_env_values = true)]
        token: Option<String>,

        /// Base URL of the GitHub REST API
        #[arg(long, default_value = DEFAULT_API_BASE)]
        api_base: String,

        /// Timeout for a single GitHub request, in seconds
        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout_secs: u64,
    },

    /// Submit a username through the form and print the profile
    ///
    /// Example: github-user-lookup lookup octocat
    Lookup {
        /// GitHub username to look up
        username: String,

        /// Base URL of a running `serve` instance
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        endpoint: String,

        /// Print the profile as JSON instead of a card
        #[arg(long)]
        json: bool,
    },
}
