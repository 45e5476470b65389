//! Global keyboard shortcut parsing and dispatch targets.
//!
//! The shell listens for key combinations against the focused window:
//! ⌘W closes, ⌘M minimizes, ⌘Tab cycles focus. Parsing and target selection
//! are pure so they test without a DOM.

use window_registry::WindowId;

use crate::model::{DesktopCommand, DesktopRegistry};

/// Normalized key combination captured from a keydown event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    /// Command/meta key held.
    pub meta: bool,
    /// Control key held.
    pub ctrl: bool,
    /// Shift key held.
    pub shift: bool,
    /// Alt/option key held.
    pub alt: bool,
    /// Lowercased key value.
    pub key: String,
}

impl KeyCombo {
    /// Builds a combo from raw modifier flags and the event key string.
    pub fn from_parts(meta: bool, ctrl: bool, shift: bool, alt: bool, key: &str) -> Self {
        Self {
            meta,
            ctrl,
            shift,
            alt,
            key: key.to_ascii_lowercase(),
        }
    }
}

/// Maps a combo to the registry command it should dispatch, if any.
///
/// Close and minimize need a focused window; with none focused the shortcut
/// falls through to the browser.
pub fn shortcut_command(combo: &KeyCombo, registry: &DesktopRegistry) -> Option<DesktopCommand> {
    if !combo.meta || combo.ctrl || combo.alt || combo.shift {
        return None;
    }

    match combo.key.as_str() {
        "w" => registry
            .focused_window_id()
            .cloned()
            .map(|id| DesktopCommand::Close { id }),
        "m" => registry
            .focused_window_id()
            .cloned()
            .map(|id| DesktopCommand::Minimize { id }),
        "tab" => cycle_focus_target(registry).map(|id| DesktopCommand::Focus { id }),
        _ => None,
    }
}

/// Picks the bottom-most visible window as the next focus target.
///
/// Repeatedly cycling therefore rotates through the visible stack: each
/// focus raises the target to the top, exposing a new bottom window.
pub fn cycle_focus_target(registry: &DesktopRegistry) -> Option<WindowId> {
    registry
        .stack_ordered()
        .into_iter()
        .find(|window| !window.is_minimized)
        .map(|window| window.id.clone())
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::ApplicationId;
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use window_registry::{apply, OpenWindowRequest, WindowCommand};

    use super::*;
    use crate::model::WindowContent;

    fn content(id: &str) -> WindowContent {
        WindowContent {
            app: ApplicationId::trusted(id),
            launch_params: Value::Null,
        }
    }

    fn open(registry: &mut DesktopRegistry, id: &str) {
        apply(
            registry,
            WindowCommand::Open(OpenWindowRequest::new(id, id.to_uppercase(), content(id))),
        )
        .expect("open window");
    }

    fn meta(key: &str) -> KeyCombo {
        KeyCombo::from_parts(true, false, false, false, key)
    }

    #[test]
    fn meta_w_closes_the_focused_window() {
        let mut registry = DesktopRegistry::new();
        open(&mut registry, "blog");

        assert_eq!(
            shortcut_command(&meta("W"), &registry),
            Some(DesktopCommand::Close {
                id: WindowId::new("blog")
            })
        );
    }

    #[test]
    fn meta_m_minimizes_the_focused_window() {
        let mut registry = DesktopRegistry::new();
        open(&mut registry, "blog");

        assert_eq!(
            shortcut_command(&meta("m"), &registry),
            Some(DesktopCommand::Minimize {
                id: WindowId::new("blog")
            })
        );
    }

    #[test]
    fn close_shortcut_needs_a_focused_window() {
        let mut registry = DesktopRegistry::new();
        open(&mut registry, "blog");
        apply(
            &mut registry,
            WindowCommand::Close {
                id: WindowId::new("blog"),
            },
        )
        .expect("close");

        assert_eq!(shortcut_command(&meta("w"), &registry), None);
    }

    #[test]
    fn extra_modifiers_disable_the_shortcut() {
        let mut registry = DesktopRegistry::new();
        open(&mut registry, "blog");

        let shifted = KeyCombo::from_parts(true, false, true, false, "w");
        let bare = KeyCombo::from_parts(false, false, false, false, "w");
        assert_eq!(shortcut_command(&shifted, &registry), None);
        assert_eq!(shortcut_command(&bare, &registry), None);
    }

    #[test]
    fn cycle_picks_the_bottom_visible_window() {
        let mut registry = DesktopRegistry::new();
        open(&mut registry, "a");
        open(&mut registry, "b");
        open(&mut registry, "c");

        assert_eq!(cycle_focus_target(&registry), Some(WindowId::new("a")));

        apply(
            &mut registry,
            WindowCommand::Minimize {
                id: WindowId::new("a"),
            },
        )
        .expect("minimize");
        assert_eq!(cycle_focus_target(&registry), Some(WindowId::new("b")));
    }

    #[test]
    fn repeated_cycling_rotates_through_the_stack() {
        let mut registry = DesktopRegistry::new();
        open(&mut registry, "a");
        open(&mut registry, "b");
        open(&mut registry, "c");

        let mut visits = Vec::new();
        for _ in 0..3 {
            let target = cycle_focus_target(&registry).expect("visible window");
            visits.push(target.as_str().to_string());
            apply(&mut registry, DesktopCommand::Focus { id: target }).expect("focus");
        }

        assert_eq!(visits, vec!["a", "b", "c"]);
    }
}
