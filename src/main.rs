// src/main.rs
// =============================================================================
// This is the entry point of our application.
//
// What happens here:
// 1. Load a .env file if there is one, and set up logging
// 2. Parse command-line arguments using clap
// 3. Either run the proxy server or run one lookup through the form
// 4. Exit with proper code (0 = success, 1 = lookup failed, 2 = error)
// =============================================================================

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use github_user_lookup::cli::{Cli, Commands};
use github_user_lookup::client::{ProfileFetcher, UserQuery};
use github_user_lookup::config::ProxyConfig;
use github_user_lookup::form::{render_form, render_result, SubmitOutcome, UserForm};
use github_user_lookup::proxy::{ErrorEnvelope, ProxyEndpoint};
use github_user_lookup::server;

#[tokio::main]
async fn main() {
    // Missing .env is normal, the token may come from the real environment
    dotenvy::dotenv().ok();
    init_tracing();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so stdout only carries the lookup result
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            bind,
            token,
            api_base,
            timeout_secs,
        } => handle_serve(bind, token, &api_base, timeout_secs).await,
        Commands::Lookup {
            username,
            endpoint,
            json,
        } => handle_lookup(username, &endpoint, json).await,
    }
}

// Handles the 'serve' subcommand
//
// Only returns if the server fails
async fn handle_serve(
    bind: SocketAddr,
    token: Option<String>,
    api_base: &str,
    timeout_secs: u64,
) -> Result<i32> {
    let config = ProxyConfig::new(token)?
        .with_api_base(api_base)?
        .with_timeout(Duration::from_secs(timeout_secs));
    let endpoint = ProxyEndpoint::new(config)?;

    server::serve(bind, endpoint).await?;
    Ok(0)
}

// Handles the 'lookup' subcommand
//
// Returns:
//   Ok(0) = profile printed
//   Ok(1) = the username was rejected or the lookup failed
async fn handle_lookup(username: String, endpoint: &str, json: bool) -> Result<i32> {
    let fetcher = ProfileFetcher::new(endpoint)?;
    let mut form = UserForm::new(UserQuery::new(fetcher)).with_on_submit(|data| {
        tracing::info!(username = %data.username, "Submitting lookup");
    });

    form.set_input(username);
    if form.submit() != SubmitOutcome::Submitted {
        print!("{}", render_form(&form));
        return Ok(1);
    }

    let state = form.query().settled().await;

    if json {
        let output = match (state.data(), state.error()) {
            (Some(user), _) => serde_json::to_string_pretty(user)?,
            (None, error) => serde_json::to_string_pretty(&ErrorEnvelope {
                error: error.unwrap_or("Request failed").to_string(),
            })?,
        };
        println!("{}", output);
    } else {
        print!("{}", render_result(&state));
    }

    if state.data().is_some() {
        Ok(0)
    } else {
        Ok(1)
    }
}
