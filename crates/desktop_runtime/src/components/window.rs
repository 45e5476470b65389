use desktop_app_contract::{AppHost, AppMountContext};
use leptos::*;
use window_registry::{WindowCommand, WindowId};

use super::{
    pointer_from_pointer_event, resize_edge_class, stop_mouse_event, try_set_pointer_capture,
};
use crate::{
    apps,
    model::{DragSession, ResizeEdge, ResizeSession},
    runtime_context::{handle_app_command, use_desktop_runtime},
};

const RESIZE_EDGES: [ResizeEdge; 8] = [
    ResizeEdge::North,
    ResizeEdge::South,
    ResizeEdge::East,
    ResizeEdge::West,
    ResizeEdge::NorthEast,
    ResizeEdge::NorthWest,
    ResizeEdge::SouthEast,
    ResizeEdge::SouthWest,
];

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let id_for_lookup = window_id.clone();
    let window = Signal::derive(move || runtime.state.get().window(&id_for_lookup).cloned());

    // Mirror of the original chrome's focus-on-mount effect. Safe because the
    // registry short-circuits focus on an already-focused window.
    let id_for_mount = window_id.clone();
    create_effect(move |prev: Option<()>| {
        if prev.is_none() {
            runtime.dispatch_command(WindowCommand::Focus {
                id: id_for_mount.clone(),
            });
        }
    });

    let visible = move || window.get().map(|w| !w.is_minimized).unwrap_or(false);

    view! {
        <Show when=visible fallback=|| ()>
            <WindowFrame window_id=window_id.clone() />
        </Show>
    }
}

#[component]
fn WindowFrame(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let id_for_lookup = window_id.clone();
    let window = Signal::derive(move || runtime.state.get().window(&id_for_lookup).cloned());

    let frame_style = move || {
        window
            .get()
            .map(|w| {
                format!(
                    "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                    w.rect.x, w.rect.y, w.rect.w, w.rect.h, w.stack_order
                )
            })
            .unwrap_or_default()
    };
    let frame_class = move || {
        let mut class = String::from("desktop-window");
        if let Some(w) = window.get() {
            if w.is_focused {
                class.push_str(" focused");
            }
            if !w.has_chrome {
                class.push_str(" frameless");
            }
        }
        class
    };
    let title = move || window.get().map(|w| w.title.clone()).unwrap_or_default();

    let id_for_focus = window_id.clone();
    let focus = move |_ev: web_sys::PointerEvent| {
        let should_focus = window.get_untracked().map(|w| !w.is_focused).unwrap_or(false);
        if should_focus {
            runtime.dispatch_command(WindowCommand::Focus {
                id: id_for_focus.clone(),
            });
        }
    };
    let id_for_close = window_id.clone();
    let close = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_command(WindowCommand::Close {
            id: id_for_close.clone(),
        });
    };
    let id_for_minimize = window_id.clone();
    let minimize = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_command(WindowCommand::Minimize {
            id: id_for_minimize.clone(),
        });
    };

    let id_for_move = window_id.clone();
    let begin_move = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        let Some(win) = window.get_untracked() else {
            return;
        };
        if !win.is_focused {
            runtime.dispatch_command(WindowCommand::Focus {
                id: id_for_move.clone(),
            });
        }
        runtime.interaction.update(|interaction| {
            interaction.dragging = Some(DragSession {
                window_id: id_for_move.clone(),
                pointer_start: pointer_from_pointer_event(&ev),
                rect_start: win.rect,
            });
        });
    };

    let has_chrome = move || window.get().map(|w| w.has_chrome).unwrap_or(false);
    let begin_move_for_titlebar = begin_move.clone();
    let begin_move_for_strip = begin_move;

    view! {
        <section
            class=frame_class
            style=frame_style
            role="dialog"
            aria-label=title
            on:pointerdown=focus
        >
            <Show when=has_chrome fallback=|| ()>
                <header class="window-titlebar" on:pointerdown=begin_move_for_titlebar.clone()>
                    <div class="titlebar-controls">
                        <button
                            class="traffic-light close"
                            aria-label="Close"
                            on:pointerdown=move |ev: web_sys::PointerEvent| {
                                ev.prevent_default();
                                ev.stop_propagation();
                            }
                            on:click=close.clone()
                        >
                            <span aria-hidden="true">"✕"</span>
                        </button>
                        <button
                            class="traffic-light minimize"
                            aria-label="Minimize"
                            on:pointerdown=move |ev: web_sys::PointerEvent| {
                                ev.prevent_default();
                                ev.stop_propagation();
                            }
                            on:click=minimize.clone()
                        >
                            <span aria-hidden="true">"−"</span>
                        </button>
                        // Decorative, like the original's zoom button.
                        <button
                            class="traffic-light zoom"
                            aria-label="Zoom"
                            on:click=move |ev| stop_mouse_event(&ev)
                        >
                            <span aria-hidden="true">"+"</span>
                        </button>
                    </div>
                    <span class="titlebar-title">{title}</span>
                    <div class="titlebar-spacer" aria-hidden="true"></div>
                </header>
            </Show>
            // Frameless windows draw their own chrome; this strip keeps
            // their title region draggable without standard chrome.
            <Show when=move || !has_chrome() fallback=|| ()>
                <div
                    class="frameless-drag-strip"
                    aria-hidden="true"
                    on:pointerdown=begin_move_for_strip.clone()
                ></div>
            </Show>
            <div class="window-body">
                <WindowBody window_id=window_id.clone() />
            </div>
            {RESIZE_EDGES
                .into_iter()
                .map(|edge| {
                    view! { <WindowResizeHandle window_id=window_id.clone() edge=edge /> }
                })
                .collect_view()}
        </section>
    }
}

#[component]
fn WindowResizeHandle(window_id: WindowId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let class_name = format!("window-resize-handle {}", resize_edge_class(edge));

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        let Some(win) = runtime.state.get_untracked().window(&window_id).cloned() else {
            return;
        };
        runtime.interaction.update(|interaction| {
            interaction.resizing = Some(ResizeSession {
                window_id: win.id.clone(),
                edge,
                pointer_start: pointer_from_pointer_event(&ev),
                rect_start: win.rect,
            });
        });
    };

    view! { <div class=class_name aria-hidden="true" on:pointerdown=on_pointerdown /> }
}

#[component]
fn WindowBody(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let id_for_commands = window_id.clone();
    let command_sink = Callback::new(move |command| {
        handle_app_command(runtime, id_for_commands.clone(), command);
    });

    // Contents mount once per window lifetime; frame geometry updates never
    // re-create the app view.
    let contents = runtime
        .state
        .get_untracked()
        .window(&window_id)
        .map(|win| {
            let ctx = AppMountContext {
                window_id: win.id.clone(),
                launch_params: win.payload.launch_params.clone(),
                host: AppHost::new(command_sink),
                services: runtime.host.get_value().services(),
            };
            apps::render_window_contents(&win.payload, ctx)
        })
        .unwrap_or_else(|| view! { <p>"Closed"</p> }.into_view());

    view! { <div class="window-body-content">{contents}</div> }
}
