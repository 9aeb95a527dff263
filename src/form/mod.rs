// src/form/mod.rs
// =============================================================================
// The username form and the result view, rendered as terminal text.
//
// Submodules:
// - input: Holds the typed text, validates on submit, drives the query
// - view: Turns the form and the query state into printable text
// =============================================================================

mod input;
mod view;

pub use input::{FormData, SubmitOutcome, UserForm};
pub use view::{render_form, render_profile, render_result, AVATAR_PLACEHOLDER};
