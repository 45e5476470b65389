//! Shared contract between the desktop shell runtime and the applications it
//! hosts inside managed windows.
//!
//! Apps receive an [`AppMountContext`] when the shell mounts their view and
//! talk back exclusively through [`AppCommand`] values sent via [`AppHost`].
//! Apps never touch the window registry directly; the runtime translates
//! commands into registry operations, which keeps every window mutation on
//! the one command surface.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::{Callable, Callback};
use platform_host::HostServices;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use window_registry::WindowId;

/// Stable identifier for an installed application.
///
/// Application ids double as window keys: every app owns at most one window,
/// keyed by its id, the way the original launcher icons key their windows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Returns an app identifier when `raw` conforms to the id policy:
    /// lowercase ASCII letters, digits, and interior dashes, starting with a
    /// letter, at most 32 characters.
    pub fn new(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        if is_valid_application_id(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!(
                "invalid application id `{raw}`; expected lowercase dashed segment"
            ))
        }
    }

    /// Creates an id without validation for compile-time trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the registry window key for this application.
    pub fn window_id(&self) -> WindowId {
        WindowId::new(self.0.clone())
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_valid_application_id(raw: &str) -> bool {
    if raw.is_empty() || raw.len() > 32 {
        return false;
    }
    let bytes = raw.as_bytes();
    if !bytes[0].is_ascii_lowercase() {
        return false;
    }
    if raw.ends_with('-') {
        return false;
    }
    bytes
        .iter()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
}

/// Commands emitted by apps toward the desktop runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppCommand {
    /// Launch (or surface) another application by id.
    OpenApp(ApplicationId),
    /// Close the window hosting the sending app.
    CloseWindow,
    /// Minimize the window hosting the sending app.
    MinimizeWindow,
    /// Open a URL outside the desktop shell.
    OpenExternalUrl(String),
    /// Return the site to the lock screen.
    LockSession,
}

/// Callback bundle handed to apps for talking to the runtime.
#[derive(Clone, Copy)]
pub struct AppHost {
    commands: Callback<AppCommand>,
}

impl AppHost {
    /// Wraps the runtime's command sink.
    pub fn new(commands: Callback<AppCommand>) -> Self {
        Self { commands }
    }

    /// Sends one command to the runtime.
    pub fn send(&self, command: AppCommand) {
        self.commands.call(command);
    }
}

/// DOM id an app renders on its primary text field so the shell can move
/// input focus there after a focus transfer.
pub fn window_primary_input_dom_id(window_id: &WindowId) -> String {
    format!("window-{window_id}-primary-input")
}

/// Everything an app receives when the shell mounts its view.
#[derive(Clone)]
pub struct AppMountContext {
    /// Registry key of the hosting window.
    pub window_id: WindowId,
    /// Opaque launch parameters from the open request.
    pub launch_params: Value,
    /// Command sink back to the runtime.
    pub host: AppHost,
    /// Host services (assistant, speech, storage) injected by the shell.
    pub services: HostServices,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_lowercase_ids() {
        for raw in ["projects", "facetime", "resume-pdf", "a1"] {
            assert!(ApplicationId::new(raw).is_ok(), "{raw} should validate");
        }
    }

    #[test]
    fn rejects_malformed_ids() {
        for raw in [
            "",
            "Projects",
            "1projects",
            "projects-",
            "pro jects",
            "pro_jects",
        ] {
            assert!(ApplicationId::new(raw).is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn rejects_overlong_ids() {
        let raw = "a".repeat(33);
        assert!(ApplicationId::new(raw).is_err());
    }

    #[test]
    fn window_id_matches_app_id() {
        let app = ApplicationId::trusted("messages");
        assert_eq!(app.window_id().as_str(), "messages");
    }

    #[test]
    fn primary_input_dom_ids_are_stable_per_window() {
        let id = WindowId::new("messages");
        assert_eq!(
            window_primary_input_dom_id(&id),
            "window-messages-primary-input"
        );
    }
}
