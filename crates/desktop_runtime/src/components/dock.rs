use leptos::*;
use system_ui::{Icon, IconName, IconSize};
use window_registry::WindowId;

use crate::{
    apps,
    runtime_context::{activate_app, use_desktop_runtime},
};

/// Launcher strip along the bottom edge.
///
/// A click restores the app's window when it is minimized and launches the
/// app otherwise; the branch reads `is_minimized` straight from the
/// registry. Minimized windows get an indicator dot under their tile.
#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let hovered = create_rw_signal(None::<&'static str>);

    view! {
        <footer class="dock-wrap">
            <div class="dock" role="toolbar" aria-label="Dock">
                <For each=move || apps::dock_apps() key=|entry| entry.id let:entry>
                    <button
                        class=move || {
                            if hovered.get() == Some(entry.id) {
                                "dock-item hovered"
                            } else {
                                "dock-item"
                            }
                        }
                        data-app=entry.id
                        aria-label=entry.title
                        on:mouseenter=move |_| hovered.set(Some(entry.id))
                        on:mouseleave=move |_| hovered.set(None)
                        on:click=move |_| activate_app(runtime, entry.id)
                    >
                        <span class="dock-item-glyph" aria-hidden="true">
                            <Icon icon=entry.icon size=IconSize::Lg />
                        </span>
                        <Show
                            when=move || state.get().is_minimized(&WindowId::new(entry.id))
                            fallback=|| ()
                        >
                            <span class="dock-minimized-dot" aria-hidden="true"></span>
                        </Show>
                        <Show when=move || hovered.get() == Some(entry.id) fallback=|| ()>
                            <span class="dock-tooltip">{entry.title}</span>
                        </Show>
                    </button>
                </For>

                <span class="dock-divider" aria-hidden="true"></span>

                <button
                    class=move || {
                        if hovered.get() == Some("siri") { "dock-item hovered" } else { "dock-item" }
                    }
                    data-app="siri"
                    aria-label="Siri"
                    aria-pressed=move || runtime.assistant_open.get()
                    on:mouseenter=move |_| hovered.set(Some("siri"))
                    on:mouseleave=move |_| hovered.set(None)
                    on:click=move |_| runtime.assistant_open.update(|open| *open = !*open)
                >
                    <span class="dock-item-glyph" aria-hidden="true">
                        <Icon icon=IconName::Waveform size=IconSize::Lg />
                    </span>
                    <Show when=move || hovered.get() == Some("siri") fallback=|| ()>
                        <span class="dock-tooltip">"Siri"</span>
                    </Show>
                </button>
            </div>
        </footer>
    }
}
