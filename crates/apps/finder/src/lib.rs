//! Finder-style file browser mockup.
//!
//! This window opens frameless and draws its own chrome, so its traffic
//! lights route close/minimize back through the app host instead of the
//! standard title bar.

use desktop_app_contract::{AppCommand, AppMountContext};
use leptos::*;

#[derive(Clone, Copy, PartialEq, Eq)]
struct ProjectEntry {
    name: &'static str,
    kind: &'static str,
    location: &'static str,
    modified: &'static str,
    summary: &'static str,
}

const PROJECT_ENTRIES: [ProjectEntry; 7] = [
    ProjectEntry {
        name: "window-registry",
        kind: "Crate",
        location: "/projects/window-registry",
        modified: "2026-07-18",
        summary: "Deterministic window manager core: stacking, focus, commands.",
    },
    ProjectEntry {
        name: "desktop-runtime",
        kind: "Crate",
        location: "/projects/desktop-runtime",
        modified: "2026-07-21",
        summary: "Reactive shell around the registry: chrome, dock, shortcuts.",
    },
    ProjectEntry {
        name: "glassdesk-site",
        kind: "App",
        location: "/projects/glassdesk-site",
        modified: "2026-07-30",
        summary: "Lock screen and entry shell for the desktop simulation.",
    },
    ProjectEntry {
        name: "face-filters",
        kind: "Experiment",
        location: "/projects/face-filters",
        modified: "2026-06-02",
        summary: "Canvas overlays drawn from normalized face landmarks.",
    },
    ProjectEntry {
        name: "voice-intents",
        kind: "Experiment",
        location: "/projects/voice-intents",
        modified: "2026-06-14",
        summary: "Utterance parser behind the assistant popup.",
    },
    ProjectEntry {
        name: "completion-client",
        kind: "Crate",
        location: "/projects/completion-client",
        modified: "2026-05-27",
        summary: "Fetch wrapper for the chat endpoint, with scripted fakes.",
    },
    ProjectEntry {
        name: "dock-magnify",
        kind: "Experiment",
        location: "/projects/dock-magnify",
        modified: "2026-04-09",
        summary: "Hover scaling and minimized-indicator dots for the dock.",
    },
];

const SIDEBAR_KINDS: [(&str, Option<&str>); 4] = [
    ("All", None),
    ("Crates", Some("Crate")),
    ("Apps", Some("App")),
    ("Experiments", Some("Experiment")),
];

fn filtered_entries(kind: Option<&str>) -> Vec<ProjectEntry> {
    PROJECT_ENTRIES
        .into_iter()
        .filter(|entry| kind.map(|k| entry.kind == k).unwrap_or(true))
        .collect()
}

/// Project browser window with self-drawn chrome.
#[component]
pub fn FinderApp(ctx: AppMountContext) -> impl IntoView {
    let host = ctx.host;
    let selected_kind = create_rw_signal(None::<&'static str>);
    let selected_row = create_rw_signal(None::<usize>);

    let close = move |_| host.send(AppCommand::CloseWindow);
    let minimize = move |_| host.send(AppCommand::MinimizeWindow);

    let rows = move || filtered_entries(selected_kind.get());

    view! {
        <div class="finder-shell">
            <header class="finder-titlebar">
                <div class="titlebar-controls">
                    <button class="traffic-light close" aria-label="Close" on:click=close>
                        <span aria-hidden="true">"✕"</span>
                    </button>
                    <button class="traffic-light minimize" aria-label="Minimize" on:click=minimize>
                        <span aria-hidden="true">"−"</span>
                    </button>
                    <button class="traffic-light zoom" aria-label="Zoom">
                        <span aria-hidden="true">"+"</span>
                    </button>
                </div>
                <span class="finder-title">"Projects"</span>
                <div class="titlebar-spacer" aria-hidden="true"></div>
            </header>

            <div class="finder-workspace">
                <aside class="finder-sidebar" aria-label="Favorites">
                    <div class="sidebar-heading">"Favorites"</div>
                    <ul>
                        {SIDEBAR_KINDS
                            .into_iter()
                            .map(|(label, kind)| {
                                view! {
                                    <li>
                                        <button
                                            class=move || {
                                                if selected_kind.get() == kind {
                                                    "sidebar-item selected"
                                                } else {
                                                    "sidebar-item"
                                                }
                                            }
                                            on:click=move |_| {
                                                selected_kind.set(kind);
                                                selected_row.set(None);
                                            }
                                        >
                                            {label}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </aside>

                <section class="finder-pane">
                    <table class="finder-list" role="grid" aria-label="Projects">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Kind"</th>
                                <th>"Modified"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each={move || rows().into_iter().enumerate().collect::<Vec<_>>()}
                                key=|(_, entry)| entry.name
                                let:item
                            >
                                {
                                    let (idx, entry) = item;
                                    view! {
                                        <tr
                                            class=move || {
                                                if selected_row.get() == Some(idx) { "selected" } else { "" }
                                            }
                                            on:mousedown=move |_| selected_row.set(Some(idx))
                                        >
                                            <td>{entry.name}</td>
                                            <td>{entry.kind}</td>
                                            <td>{entry.modified}</td>
                                        </tr>
                                    }
                                }
                            </For>
                        </tbody>
                    </table>

                    <footer class="finder-statusbar">
                        <span>{move || format!("{} item(s)", rows().len())}</span>
                        <span>
                            {move || {
                                selected_row
                                    .get()
                                    .and_then(|idx| rows().into_iter().nth(idx))
                                    .map(|entry| format!("{} — {}", entry.location, entry.summary))
                                    .unwrap_or_else(|| "Ready".to_string())
                            }}
                        </span>
                    </footer>
                </section>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_filter_shows_everything() {
        assert_eq!(filtered_entries(None).len(), PROJECT_ENTRIES.len());
    }

    #[test]
    fn kind_filters_partition_the_catalog() {
        let crates = filtered_entries(Some("Crate"));
        let apps = filtered_entries(Some("App"));
        let experiments = filtered_entries(Some("Experiment"));

        assert!(crates.iter().all(|entry| entry.kind == "Crate"));
        assert_eq!(
            crates.len() + apps.len() + experiments.len(),
            PROJECT_ENTRIES.len()
        );
    }

    #[test]
    fn unknown_kind_yields_no_rows() {
        assert!(filtered_entries(Some("Screenplay")).is_empty());
    }
}
