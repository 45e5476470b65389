use leptos::*;
use system_ui::{Icon, IconSize};

use crate::{
    apps,
    runtime_context::{activate_app, use_desktop_runtime},
};

/// Desktop icon column; double-click launches the app, the original icon
/// grid's activation gesture.
#[component]
pub(super) fn DesktopIconGrid() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <div class="desktop-icon-grid" role="group" aria-label="Desktop icons">
            <For each=move || apps::desktop_icon_apps() key=|entry| entry.id let:entry>
                <button
                    class="desktop-icon"
                    data-app=entry.id
                    on:dblclick=move |_| activate_app(runtime, entry.id)
                >
                    <span class="desktop-icon-glyph" aria-hidden="true">
                        <Icon icon=entry.icon size=IconSize::Xl />
                    </span>
                    <span class="desktop-icon-label">{entry.title}</span>
                </button>
            </For>
        </div>
    }
}
