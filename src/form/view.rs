// src/form/view.rs
// =============================================================================
// Text rendering for the form and the lookup result.
//
// Nothing here has side effects: every function builds a String so the CLI
// can print it and the tests can inspect it.
// =============================================================================

use super::input::UserForm;
use crate::client::{Phase, QueryState};
use crate::github::GitHubUser;

/// Shown instead of the avatar when GitHub returned a blank URL.
pub const AVATAR_PLACEHOLDER: &str = "/avatar-placeholder.svg";

pub fn render_form(form: &UserForm) -> String {
    let mut lines = vec!["GitHub Username".to_string()];

    // An empty input shows the placeholder
    let input = if form.input().is_empty() {
        "octocat"
    } else {
        form.input()
    };
    lines.push(format!("> {}", input));

    if let Some(rule) = form.inline_error() {
        lines.push(format!("  ⚠️  {}", rule));
    }

    let state = if form.can_submit() { "" } else { " (disabled)" };
    lines.push(format!("[ {} ]{}", form.button_label(), state));

    to_text(lines)
}

// Renders whatever the query currently holds
//
// Idle renders as an empty string, like the page before any submit
pub fn render_result(state: &QueryState) -> String {
    match state.phase() {
        Phase::Idle => String::new(),
        Phase::Loading => "Loading…\n".to_string(),
        Phase::Failed(message) => format!("❌ {}\n", message),
        Phase::Loaded(user) => render_profile(user),
    }
}

pub fn render_profile(user: &GitHubUser) -> String {
    let avatar = match user.avatar_url.trim() {
        "" => AVATAR_PLACEHOLDER,
        url => url,
    };

    let mut lines = vec![
        format!("🖼  {}", avatar),
        user.name.as_deref().unwrap_or(&user.login).to_string(),
        format!("@{}  {}", user.login, user.html_url),
    ];
    if let Some(bio) = present(&user.bio) {
        lines.push(bio.to_string());
    }

    // Stats table, same column width as the header
    lines.push(String::new());
    lines.push(format!(
        "{:<15}{:<15}{:<15}{:<15}",
        "Followers", "Following", "Public Repos", "Public Gists"
    ));
    lines.push(format!(
        "{:<15}{:<15}{:<15}{:<15}",
        user.followers, user.following, user.public_repos, user.public_gists
    ));

    let mut links = Vec::new();
    if let Some(location) = present(&user.location) {
        links.push(format!("📍 {}", location));
    }
    if let Some(blog) = present(&user.blog) {
        links.push(format!("🔗 {}", blog));
    }
    if let Some(handle) = present(&user.twitter_username) {
        links.push(format!("🐦 @{}  https://twitter.com/{}", handle, handle));
    }
    if !links.is_empty() {
        lines.push(String::new());
        lines.extend(links);
    }

    to_text(lines)
}

// Joins lines with a trailing newline after each one
fn to_text(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

// Some and non-empty
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
