// src/client/mod.rs
// =============================================================================
// This module is the client side of a username lookup.
//
// Submodules:
// - fetcher: One HTTP call to our proxy, with error text normalization
// - query: The request coordinator that tracks idle/loading/error/success
//   and makes sure only the newest lookup can update the state
// =============================================================================

mod fetcher;
mod query;

pub use fetcher::{failure_message, FetchError, ProfileFetcher};
pub use query::{Phase, QueryState, UserQuery};
