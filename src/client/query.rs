// src/client/query.rs
// =============================================================================
// The request coordinator behind the form.
//
// It holds an optional "active query" (the last submitted username):
// - While unset, nothing is fetched and the state is Idle
// - Setting a new username starts exactly one fetch
// - Setting the same username again does nothing
//
// Out-of-order answers:
// Every key change bumps a generation number stored inside the state.
// A fetch remembers the generation it started under and only writes its
// result if that number is still current. The check and the write happen
// under the watch channel's lock (send_if_modified), so a slow answer for
// an abandoned username can never overwrite a newer one. The previous task
// is also aborted, which saves the wasted work.
//
// Rust concepts:
// - tokio::sync::watch: One writer, many readers, always the latest value
// - JoinHandle::abort: Cooperative cancellation of a spawned task
// =============================================================================

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::fetcher::ProfileFetcher;
use crate::github::GitHubUser;
use crate::validate::ValidatedUsername;

/// Where the current lookup stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Failed(String),
    Loaded(GitHubUser),
}

/// A consistent snapshot of the coordinator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryState {
    generation: u64,
    key: Option<ValidatedUsername>,
    phase: Phase,
}

impl QueryState {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn key(&self) -> Option<&ValidatedUsername> {
        self.key.as_ref()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&GitHubUser> {
        match &self.phase {
            Phase::Loaded(user) => Some(user),
            _ => None,
        }
    }
}

pub struct UserQuery {
    fetcher: ProfileFetcher,
    state: Arc<watch::Sender<QueryState>>,
    in_flight: Option<JoinHandle<()>>,
}

impl UserQuery {
    pub fn new(fetcher: ProfileFetcher) -> Self {
        let (state, _) = watch::channel(QueryState::default());
        Self {
            fetcher,
            state: Arc::new(state),
            in_flight: None,
        }
    }

    // Changes the active query
    //
    // Returns: true if a fetch was started
    //
    // Must be called from inside a tokio runtime, the fetch runs as a task.
    pub fn set_query(&mut self, key: Option<ValidatedUsername>) -> bool {
        let unchanged = self.state.borrow().key == key;
        if unchanged {
            return false;
        }
        self.start(key)
    }

    // Fetches the active query again, even though the key did not change
    //
    // Returns: false when there is no active query
    pub fn refetch(&mut self) -> bool {
        let key = self.state.borrow().key.clone();
        if key.is_none() {
            return false;
        }
        self.start(key)
    }

    fn start(&mut self, key: Option<ValidatedUsername>) -> bool {
        // Whatever was running belongs to an older key now
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }

        // Bump the generation and reset the phase in one write, so readers
        // never see the new key paired with the old result
        let mut generation = 0;
        self.state.send_modify(|state| {
            state.generation += 1;
            generation = state.generation;
            state.phase = if key.is_some() {
                Phase::Loading
            } else {
                Phase::Idle
            };
            state.key = key.clone();
        });

        // Clearing the query fetches nothing
        let Some(username) = key else {
            return false;
        };

        tracing::debug!(%username, generation, "Starting lookup");

        // The task gets its own handles; Client and Arc are cheap to clone
        let fetcher = self.fetcher.clone();
        let state = Arc::clone(&self.state);
        self.in_flight = Some(tokio::spawn(async move {
            let phase = match fetcher.fetch(&username).await {
                Ok(user) => Phase::Loaded(user),
                Err(e) => Phase::Failed(e.message),
            };

            if !apply_if_current(&state, generation, phase) {
                tracing::debug!(%username, generation, "Discarded stale lookup result");
            }
        }));

        true
    }

    pub fn snapshot(&self) -> QueryState {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error().map(str::to_string)
    }

    pub fn data(&self) -> Option<GitHubUser> {
        self.state.borrow().data().cloned()
    }

    pub fn subscribe(&self) -> watch::Receiver<QueryState> {
        self.state.subscribe()
    }

    // Waits until the current lookup (if any) has finished
    pub async fn settled(&self) -> QueryState {
        let mut receiver = self.state.subscribe();
        let settled = match receiver.wait_for(|state| !state.is_loading()).await {
            Ok(state) => state.clone(),
            // The sender lives as long as self, so this cannot happen
            Err(_) => self.snapshot(),
        };
        settled
    }
}

// Stores a finished lookup's outcome, but only if no newer lookup started
// since `generation` was handed out
//
// Returns: true if the phase was written
fn apply_if_current(state: &watch::Sender<QueryState>, generation: u64, phase: Phase) -> bool {
    // The comparison and the write share the channel's lock
    state.send_if_modified(|current| {
        if current.generation != generation {
            return false;
        }
        current.phase = phase;
        true
    })
}

impl Drop for UserQuery {
    fn drop(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is a watch channel?
//    - A single slot holding the latest value, plus a version counter
//    - Receivers never see a backlog, only the newest state
//    - wait_for() sleeps until the value matches a predicate
//
// 2. send_modify vs send_if_modified:
//    - send_modify always edits the value and wakes receivers
//    - send_if_modified lets the closure decide; returning false means
//      "nothing changed" and nobody is woken
//
// 3. Why Arc around the Sender?
//    - The spawned fetch task needs to write its result
//    - The UserQuery also keeps writing on every key change
//    - Arc gives both of them shared ownership of the same sender
// -----------------------------------------------------------------------------
