// src/form/input.rs
// =============================================================================
// The username form.
//
// Behaviour:
// - The submit button is disabled while the input is blank or a lookup is
//   still running
// - Submitting runs the validator; a failure is shown inline and nothing
//   is fetched
// - A valid username is handed to the optional on-submit callback, then
//   becomes the active query
// =============================================================================

use crate::client::UserQuery;
use crate::validate::{validate_username, UsernameError, ValidatedUsername};

/// What the form hands to its on-submit callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormData {
    pub username: ValidatedUsername,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Submit was disabled, nothing happened
    Blocked,
    /// Validation failed, the message is now shown inline
    Invalid(UsernameError),
    /// The username became the active query
    Submitted,
}

type SubmitCallback = Box<dyn FnMut(&FormData) + Send>;

pub struct UserForm {
    input: String,
    inline_error: Option<UsernameError>,
    on_submit: Option<SubmitCallback>,
    query: UserQuery,
}

impl UserForm {
    pub fn new(query: UserQuery) -> Self {
        Self {
            input: String::new(),
            inline_error: None,
            on_submit: None,
            query,
        }
    }

    pub fn with_on_submit(mut self, callback: impl FnMut(&FormData) + Send + 'static) -> Self {
        self.on_submit = Some(Box::new(callback));
        self
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn inline_error(&self) -> Option<UsernameError> {
        self.inline_error
    }

    pub fn is_submitting(&self) -> bool {
        self.query.is_loading()
    }

    pub fn can_submit(&self) -> bool {
        !self.input.trim().is_empty() && !self.is_submitting()
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_submitting() {
            "Submitting…"
        } else {
            "Submit"
        }
    }

    pub fn query(&self) -> &UserQuery {
        &self.query
    }

    // Handles a press of the submit button
    //
    // Must be called from inside a tokio runtime (the lookup is spawned)
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.can_submit() {
            return SubmitOutcome::Blocked;
        }

        let username = match validate_username(&self.input) {
            Ok(username) => username,
            Err(rule) => {
                self.inline_error = Some(rule);
                return SubmitOutcome::Invalid(rule);
            }
        };

        self.inline_error = None;
        let data = FormData { username };
        if let Some(callback) = self.on_submit.as_mut() {
            callback(&data);
        }
        self.query.set_query(Some(data.username));

        SubmitOutcome::Submitted
    }
}
