//! Command surface and transition logic for the window registry.

use thiserror::Error;

use crate::model::{OpenWindowRequest, WindowId, WindowRecord};
use crate::registry::WindowRegistry;

/// Commands accepted by [`apply`] to mutate a [`WindowRegistry`].
#[derive(Debug, Clone, PartialEq)]
pub enum WindowCommand<P> {
    /// Open (or reset, if the key is live) a window. The new window is
    /// focused and raised to the top of the stack.
    Open(OpenWindowRequest<P>),
    /// Remove a window entirely. Focus is not transferred to another window.
    Close {
        /// Window to close.
        id: WindowId,
    },
    /// Hide a window from the visible stack; state and geometry are kept.
    Minimize {
        /// Window to minimize.
        id: WindowId,
    },
    /// Bring a minimized window back, focused and on top.
    Restore {
        /// Window to restore.
        id: WindowId,
    },
    /// Focus and raise a window. A no-op when it is already focused.
    Focus {
        /// Window to focus.
        id: WindowId,
    },
    /// Set a window's position verbatim.
    Move {
        /// Window to move.
        id: WindowId,
        /// New left edge.
        x: i32,
        /// New top edge.
        y: i32,
    },
    /// Set a window's size verbatim.
    Resize {
        /// Window to resize.
        id: WindowId,
        /// New width.
        width: i32,
        /// New height.
        height: i32,
    },
}

/// Side-effect intents emitted by [`apply`] for the shell runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEffect {
    /// Focus moved to this window; the shell may forward DOM/input focus.
    ///
    /// Commands that transfer focus (`Open`, `Restore`, the non-short-circuit
    /// `Focus` path) emit exactly one of these.
    FocusTransferred(WindowId),
}

/// Errors reported by [`apply`].
///
/// Referencing an unknown window is the only runtime failure class. Internal
/// callers treat it as a benign no-op (log and continue); the registry is
/// left untouched by any failed command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The target window key is not present in the registry.
    #[error("window not found")]
    WindowNotFound,
    /// An open request carried an empty window key.
    #[error("window id must not be empty")]
    EmptyWindowId,
}

/// Applies one command to the registry and collects resulting side effects.
///
/// All mutation is synchronous and total: when this returns, observers read a
/// fully-updated registry. Commands are applied strictly in call order.
///
/// # Errors
///
/// Returns [`RegistryError::WindowNotFound`] when a non-`Open` command names
/// an absent window, and [`RegistryError::EmptyWindowId`] for an `Open` with
/// an empty key. Failed commands leave the registry unchanged.
pub fn apply<P>(
    registry: &mut WindowRegistry<P>,
    command: WindowCommand<P>,
) -> Result<Vec<RegistryEffect>, RegistryError> {
    let mut effects = Vec::new();
    match command {
        WindowCommand::Open(request) => {
            if request.id.as_str().is_empty() {
                return Err(RegistryError::EmptyWindowId);
            }
            let stack_order = registry.allocate_stack_order();
            registry.clear_focus();
            let record = WindowRecord {
                id: request.id.clone(),
                title: request.title,
                rect: request.rect.unwrap_or_default(),
                stack_order,
                is_focused: true,
                is_minimized: false,
                has_chrome: request.has_chrome,
                payload: request.payload,
            };
            // Upsert: reopening a live key replaces the whole record,
            // geometry included. The dock's launch path depends on this.
            registry.insert(record);
            effects.push(RegistryEffect::FocusTransferred(request.id));
        }
        WindowCommand::Close { id } => {
            registry.remove(&id).ok_or(RegistryError::WindowNotFound)?;
            // No auto-refocus: zero focused windows until the user picks one.
        }
        WindowCommand::Minimize { id } => {
            let window = registry
                .window_mut(&id)
                .ok_or(RegistryError::WindowNotFound)?;
            window.is_minimized = true;
            window.is_focused = false;
            // Stack order and geometry are kept; restore re-raises.
        }
        WindowCommand::Restore { id } => {
            if !registry.contains(&id) {
                return Err(RegistryError::WindowNotFound);
            }
            // Always reallocates, even when the window is already on top.
            let stack_order = registry.allocate_stack_order();
            registry.clear_focus();
            if let Some(window) = registry.window_mut(&id) {
                window.is_minimized = false;
                window.is_focused = true;
                window.stack_order = stack_order;
            }
            effects.push(RegistryEffect::FocusTransferred(id));
        }
        WindowCommand::Focus { id } => {
            let already_focused = registry
                .window(&id)
                .ok_or(RegistryError::WindowNotFound)?
                .is_focused;
            if already_focused {
                // Required short-circuit: chrome issues focus on mount while
                // the window may already be focused; reallocating here would
                // re-render and re-trigger that effect forever.
                return Ok(effects);
            }
            let stack_order = registry.allocate_stack_order();
            registry.clear_focus();
            if let Some(window) = registry.window_mut(&id) {
                window.is_focused = true;
                window.stack_order = stack_order;
            }
            effects.push(RegistryEffect::FocusTransferred(id));
        }
        WindowCommand::Move { id, x, y } => {
            let window = registry
                .window_mut(&id)
                .ok_or(RegistryError::WindowNotFound)?;
            window.rect.x = x;
            window.rect.y = y;
        }
        WindowCommand::Resize { id, width, height } => {
            let window = registry
                .window_mut(&id)
                .ok_or(RegistryError::WindowNotFound)?;
            window.rect.w = width;
            window.rect.h = height;
        }
    }

    #[cfg(debug_assertions)]
    registry.debug_check_invariants();

    Ok(effects)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowRect;

    fn open(registry: &mut WindowRegistry<()>, id: &str) {
        apply(
            registry,
            WindowCommand::Open(OpenWindowRequest::new(id, id.to_uppercase(), ())),
        )
        .expect("open window");
    }

    fn open_at(registry: &mut WindowRegistry<()>, id: &str, rect: WindowRect) {
        let mut request = OpenWindowRequest::new(id, id.to_uppercase(), ());
        request.rect = Some(rect);
        apply(registry, WindowCommand::Open(request)).expect("open window");
    }

    fn record<'a>(registry: &'a WindowRegistry<()>, id: &str) -> &'a WindowRecord<()> {
        registry.window(&WindowId::new(id)).expect("window exists")
    }

    fn focused_count(registry: &WindowRegistry<()>) -> usize {
        registry.windows().filter(|w| w.is_focused).count()
    }

    #[test]
    fn open_focuses_new_window_and_unfocuses_the_rest() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "notes");
        open(&mut registry, "messages");

        assert_eq!(
            registry.focused_window_id(),
            Some(&WindowId::new("messages"))
        );
        assert!(!record(&registry, "notes").is_focused);
        assert!(record(&registry, "messages").stack_order > record(&registry, "notes").stack_order);
    }

    #[test]
    fn open_emits_exactly_one_focus_transfer() {
        let mut registry = WindowRegistry::new();
        let effects = apply(
            &mut registry,
            WindowCommand::Open(OpenWindowRequest::new("notes", "Notes", ())),
        )
        .expect("open window");

        assert_eq!(
            effects,
            vec![RegistryEffect::FocusTransferred(WindowId::new("notes"))]
        );
    }

    #[test]
    fn open_rejects_empty_id_and_allocates_nothing() {
        let mut registry = WindowRegistry::<()>::new();
        let result = apply(
            &mut registry,
            WindowCommand::Open(OpenWindowRequest::new("", "Anonymous", ())),
        );

        assert_eq!(result, Err(RegistryError::EmptyWindowId));
        assert!(registry.is_empty());
        assert_eq!(registry.highest_stack_order(), 0);
    }

    #[test]
    fn reopening_a_live_id_resets_the_record() {
        let mut registry = WindowRegistry::new();
        open_at(
            &mut registry,
            "projects",
            WindowRect {
                x: 100,
                y: 80,
                w: 1100,
                h: 700,
            },
        );
        apply(
            &mut registry,
            WindowCommand::Move {
                id: WindowId::new("projects"),
                x: 5,
                y: 5,
            },
        )
        .expect("move");
        open_at(
            &mut registry,
            "projects",
            WindowRect {
                x: 100,
                y: 80,
                w: 1100,
                h: 700,
            },
        );

        let reopened = record(&registry, "projects");
        assert_eq!(reopened.rect.x, 100);
        assert_eq!(reopened.rect.y, 80);
        assert!(reopened.is_focused);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn focus_transfers_and_raises_with_fresh_stack_order() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        open(&mut registry, "b");
        let b_order = record(&registry, "b").stack_order;

        apply(
            &mut registry,
            WindowCommand::Focus {
                id: WindowId::new("a"),
            },
        )
        .expect("focus");

        assert!(record(&registry, "a").is_focused);
        assert!(!record(&registry, "b").is_focused);
        assert!(record(&registry, "a").stack_order > b_order);
    }

    #[test]
    fn focusing_the_focused_window_changes_nothing() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        open(&mut registry, "b");
        let before = registry.clone();

        let effects = apply(
            &mut registry,
            WindowCommand::Focus {
                id: WindowId::new("b"),
            },
        )
        .expect("focus focused window");

        assert_eq!(registry, before);
        assert_eq!(effects, Vec::new());
    }

    #[test]
    fn minimize_hides_and_unfocuses_without_touching_stack_or_geometry() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "gallery");
        let order_before = record(&registry, "gallery").stack_order;
        let rect_before = record(&registry, "gallery").rect;

        apply(
            &mut registry,
            WindowCommand::Minimize {
                id: WindowId::new("gallery"),
            },
        )
        .expect("minimize");

        let window = record(&registry, "gallery");
        assert!(window.is_minimized);
        assert!(!window.is_focused);
        assert_eq!(window.stack_order, order_before);
        assert_eq!(window.rect, rect_before);
    }

    #[test]
    fn restore_reinstates_visibility_focus_and_top_order() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        open(&mut registry, "b");
        apply(
            &mut registry,
            WindowCommand::Minimize {
                id: WindowId::new("a"),
            },
        )
        .expect("minimize");
        let top_before = registry.highest_stack_order();

        apply(
            &mut registry,
            WindowCommand::Restore {
                id: WindowId::new("a"),
            },
        )
        .expect("restore");

        let restored = record(&registry, "a");
        assert!(!restored.is_minimized);
        assert!(restored.is_focused);
        assert!(restored.stack_order > top_before);
        assert!(!record(&registry, "b").is_focused);
        assert_eq!(focused_count(&registry), 1);
    }

    #[test]
    fn restore_reallocates_even_when_already_on_top() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        let first = record(&registry, "a").stack_order;

        apply(
            &mut registry,
            WindowCommand::Restore {
                id: WindowId::new("a"),
            },
        )
        .expect("restore");

        assert!(record(&registry, "a").stack_order > first);
    }

    #[test]
    fn geometry_survives_minimize_and_restore() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "contact");
        apply(
            &mut registry,
            WindowCommand::Move {
                id: WindowId::new("contact"),
                x: 50,
                y: 60,
            },
        )
        .expect("move");
        apply(
            &mut registry,
            WindowCommand::Minimize {
                id: WindowId::new("contact"),
            },
        )
        .expect("minimize");
        apply(
            &mut registry,
            WindowCommand::Restore {
                id: WindowId::new("contact"),
            },
        )
        .expect("restore");

        let window = record(&registry, "contact");
        assert_eq!((window.rect.x, window.rect.y), (50, 60));
    }

    #[test]
    fn move_and_resize_store_values_verbatim() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "blog");
        apply(
            &mut registry,
            WindowCommand::Move {
                id: WindowId::new("blog"),
                x: -40,
                y: -9,
            },
        )
        .expect("move");
        apply(
            &mut registry,
            WindowCommand::Resize {
                id: WindowId::new("blog"),
                width: 3,
                height: 1,
            },
        )
        .expect("resize");

        let window = record(&registry, "blog");
        assert_eq!(window.rect.x, -40);
        assert_eq!(window.rect.y, -9);
        assert_eq!(window.rect.w, 3);
        assert_eq!(window.rect.h, 1);
    }

    #[test]
    fn close_removes_the_record_entirely() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        open(&mut registry, "b");

        apply(
            &mut registry,
            WindowCommand::Close {
                id: WindowId::new("a"),
            },
        )
        .expect("close");

        assert!(!registry.contains(&WindowId::new("a")));
        assert!(registry.contains(&WindowId::new("b")));
    }

    #[test]
    fn closing_the_focused_window_leaves_nothing_focused() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        open(&mut registry, "b");

        apply(
            &mut registry,
            WindowCommand::Close {
                id: WindowId::new("b"),
            },
        )
        .expect("close");

        assert_eq!(registry.focused_window_id(), None);
        assert_eq!(focused_count(&registry), 0);
    }

    #[test]
    fn commands_on_unknown_ids_fail_without_mutating() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        let before = registry.clone();
        let ghost = WindowId::new("ghost");

        let commands = vec![
            WindowCommand::Close { id: ghost.clone() },
            WindowCommand::Minimize { id: ghost.clone() },
            WindowCommand::Restore { id: ghost.clone() },
            WindowCommand::Focus { id: ghost.clone() },
            WindowCommand::Move {
                id: ghost.clone(),
                x: 1,
                y: 2,
            },
            WindowCommand::Resize {
                id: ghost,
                width: 3,
                height: 4,
            },
        ];
        for command in commands {
            assert_eq!(
                apply(&mut registry, command),
                Err(RegistryError::WindowNotFound)
            );
            assert_eq!(registry, before);
        }
    }

    #[test]
    fn closed_id_behaves_like_never_opened() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        apply(
            &mut registry,
            WindowCommand::Close {
                id: WindowId::new("a"),
            },
        )
        .expect("close");

        assert_eq!(registry.window(&WindowId::new("a")), None);
        assert_eq!(
            apply(
                &mut registry,
                WindowCommand::Minimize {
                    id: WindowId::new("a")
                }
            ),
            Err(RegistryError::WindowNotFound)
        );
        assert_eq!(
            apply(
                &mut registry,
                WindowCommand::Focus {
                    id: WindowId::new("a")
                }
            ),
            Err(RegistryError::WindowNotFound)
        );
    }

    #[test]
    fn at_most_one_window_is_focused_after_every_command() {
        let mut registry = WindowRegistry::new();
        let script = vec![
            WindowCommand::Open(OpenWindowRequest::new("a", "A", ())),
            WindowCommand::Open(OpenWindowRequest::new("b", "B", ())),
            WindowCommand::Open(OpenWindowRequest::new("c", "C", ())),
            WindowCommand::Focus {
                id: WindowId::new("a"),
            },
            WindowCommand::Minimize {
                id: WindowId::new("a"),
            },
            WindowCommand::Restore {
                id: WindowId::new("a"),
            },
            WindowCommand::Open(OpenWindowRequest::new("b", "B", ())),
            WindowCommand::Close {
                id: WindowId::new("b"),
            },
            WindowCommand::Focus {
                id: WindowId::new("c"),
            },
            WindowCommand::Close {
                id: WindowId::new("c"),
            },
        ];

        for command in script {
            apply(&mut registry, command).expect("scripted command");
            assert!(focused_count(&registry) <= 1);
        }
    }

    #[test]
    fn stack_allocations_strictly_increase() {
        let mut registry = WindowRegistry::new();
        let mut seen = Vec::new();

        open(&mut registry, "a");
        seen.push(record(&registry, "a").stack_order);
        open(&mut registry, "b");
        seen.push(record(&registry, "b").stack_order);
        apply(
            &mut registry,
            WindowCommand::Focus {
                id: WindowId::new("a"),
            },
        )
        .expect("focus");
        seen.push(record(&registry, "a").stack_order);
        apply(
            &mut registry,
            WindowCommand::Restore {
                id: WindowId::new("b"),
            },
        )
        .expect("restore");
        seen.push(record(&registry, "b").stack_order);

        assert!(seen.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn stack_ordered_sorts_bottom_to_top() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "a");
        open(&mut registry, "b");
        apply(
            &mut registry,
            WindowCommand::Focus {
                id: WindowId::new("a"),
            },
        )
        .expect("focus");

        let ids: Vec<&str> = registry
            .stack_ordered()
            .into_iter()
            .map(|w| w.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn end_to_end_open_focus_minimize_restore_scenario() {
        let mut registry = WindowRegistry::new();
        open_at(
            &mut registry,
            "a",
            WindowRect {
                x: 10,
                y: 10,
                w: 400,
                h: 300,
            },
        );
        open_at(
            &mut registry,
            "b",
            WindowRect {
                x: 50,
                y: 50,
                w: 400,
                h: 300,
            },
        );

        assert!(!record(&registry, "a").is_focused);
        assert!(record(&registry, "b").is_focused);
        assert!(record(&registry, "b").stack_order > record(&registry, "a").stack_order);

        apply(
            &mut registry,
            WindowCommand::Focus {
                id: WindowId::new("a"),
            },
        )
        .expect("focus a");
        assert!(record(&registry, "a").is_focused);
        assert!(!record(&registry, "b").is_focused);
        assert!(record(&registry, "a").stack_order > record(&registry, "b").stack_order);

        apply(
            &mut registry,
            WindowCommand::Minimize {
                id: WindowId::new("a"),
            },
        )
        .expect("minimize a");
        assert!(record(&registry, "a").is_minimized);
        assert!(!record(&registry, "a").is_focused);
        assert!(!record(&registry, "b").is_minimized);

        apply(
            &mut registry,
            WindowCommand::Restore {
                id: WindowId::new("a"),
            },
        )
        .expect("restore a");
        let a = record(&registry, "a");
        assert!(!a.is_minimized);
        assert!(a.is_focused);
        assert_eq!(a.stack_order, registry.highest_stack_order());
    }
}
