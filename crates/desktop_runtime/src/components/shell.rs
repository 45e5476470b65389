use desktop_app_contract::AppCommand;
use desktop_app_siri::SiriPanel;
use leptos::*;
use window_registry::{WindowCommand, WindowId};

use super::{
    clamp_to_viewport, dock::Dock, icon_grid::DesktopIconGrid, menu_bar::MenuBar,
    window::DesktopWindow, MENU_BAR_HEIGHT_PX,
};
use crate::{
    keyboard::{shortcut_command, KeyCombo},
    model::{resize_rect, InteractionState, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH},
    runtime_context::{activate_app, use_desktop_runtime},
};

/// Full desktop scene: menu bar, icon grid, managed windows, dock, and the
/// assistant popup.
#[component]
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    // In-flight gestures are driven from window-level pointer events so a
    // fast drag that leaves the titlebar keeps tracking. Every intermediate
    // position is committed through the command surface; the registry treats
    // mid-gesture and end-of-gesture calls identically.
    let move_listener = window_event_listener(ev::pointermove, move |ev: web_sys::PointerEvent| {
        let interaction = runtime.interaction.get_untracked();
        if let Some(session) = interaction.dragging {
            let dx = ev.client_x() - session.pointer_start.x;
            let dy = ev.client_y() - session.pointer_start.y;
            let viewport = runtime
                .host
                .get_value()
                .desktop_viewport_rect(MENU_BAR_HEIGHT_PX);
            let rect = clamp_to_viewport(session.rect_start.offset(dx, dy), viewport);
            runtime.dispatch_command(WindowCommand::Move {
                id: session.window_id.clone(),
                x: rect.x,
                y: rect.y,
            });
        } else if let Some(session) = interaction.resizing {
            let dx = ev.client_x() - session.pointer_start.x;
            let dy = ev.client_y() - session.pointer_start.y;
            let rect = resize_rect(session.rect_start, session.edge, dx, dy)
                .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
            runtime.dispatch_command(WindowCommand::Resize {
                id: session.window_id.clone(),
                width: rect.w,
                height: rect.h,
            });
            if rect.x != session.rect_start.x || rect.y != session.rect_start.y {
                runtime.dispatch_command(WindowCommand::Move {
                    id: session.window_id.clone(),
                    x: rect.x,
                    y: rect.y,
                });
            }
        }
    });
    on_cleanup(move || move_listener.remove());

    // Releasing the pointer simply stops the gesture; the last committed
    // move/resize already holds the final geometry.
    let up_listener = window_event_listener(ev::pointerup, move |_| {
        if runtime.interaction.get_untracked() != InteractionState::default() {
            runtime.interaction.set(InteractionState::default());
        }
    });
    on_cleanup(move || up_listener.remove());

    let key_listener = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.default_prevented() {
            return;
        }
        let combo = KeyCombo::from_parts(
            ev.meta_key(),
            ev.ctrl_key(),
            ev.shift_key(),
            ev.alt_key(),
            &ev.key(),
        );
        if let Some(command) = shortcut_command(&combo, &runtime.state.get_untracked()) {
            ev.prevent_default();
            runtime.dispatch_command(command);
        }
    });
    on_cleanup(move || key_listener.remove());

    let window_ids = move || {
        state
            .get()
            .stack_ordered()
            .into_iter()
            .map(|w| w.id.clone())
            .collect::<Vec<WindowId>>()
    };

    view! {
        <div class="desktop-root">
            <MenuBar />

            <main class="desktop-stage">
                <div class="desktop-greeting" aria-hidden="true">
                    <h1 class="greeting-title">"glassdesk"</h1>
                    <p class="greeting-subtitle">"a little desktop for the web"</p>
                </div>

                <DesktopIconGrid />

                <button
                    class="desktop-file"
                    on:click=move |_| activate_app(runtime, "resume")
                >
                    <span class="desktop-file-glyph" aria-hidden="true">
                        <system_ui::Icon icon=system_ui::IconName::FileText size=system_ui::IconSize::Lg />
                    </span>
                    <span class="desktop-file-label">"Resume.pdf"</span>
                </button>

                <For each=window_ids key=|id| id.as_str().to_string() let:id>
                    <DesktopWindow window_id=id />
                </For>
            </main>

            <Dock />

            <Show when=move || runtime.assistant_open.get() fallback=|| ()>
                <AssistantPopup />
            </Show>
        </div>
    }
}

/// Voice assistant overlay. Not a managed window: it floats above the stage
/// and its commands route through the same launch path as the dock.
#[component]
fn AssistantPopup() -> impl IntoView {
    let runtime = use_desktop_runtime();

    let commands = Callback::new(move |command: AppCommand| match command {
        AppCommand::OpenApp(app) => activate_app(runtime, app.as_str()),
        AppCommand::OpenExternalUrl(url) => runtime.host.get_value().open_external_url(url),
        AppCommand::LockSession => runtime.on_lock.call(()),
        AppCommand::CloseWindow | AppCommand::MinimizeWindow => {
            runtime.assistant_open.set(false);
        }
    });

    view! {
        <div class="assistant-popup" role="dialog" aria-label="Voice assistant">
            <SiriPanel
                services=runtime.host.get_value().services()
                commands=commands
            />
            <button
                class="assistant-close"
                aria-label="Close assistant"
                on:click=move |_| runtime.assistant_open.set(false)
            >
                <span aria-hidden="true">"✕"</span>
            </button>
        </div>
    }
}
