//! Two-pane notes app holding the work-experience write-ups.

use desktop_app_contract::AppMountContext;
use leptos::*;

#[derive(Clone, Copy, PartialEq, Eq)]
struct Note {
    title: &'static str,
    dateline: &'static str,
    body: &'static str,
}

const NOTES: [Note; 3] = [
    Note {
        title: "Window manager core",
        dateline: "glassdesk · summer 2026",
        body: "Registry, stacking authority, command surface\n\n\
               • One map of window records, one monotonic counter, seven commands\n\
               • Focus is exclusive; minimize hides without forgetting geometry\n\
               • Observers are notified synchronously after every mutation\n\
               • Every invariant has a test that replays a full command script",
    },
    Note {
        title: "Shell and chrome",
        dateline: "glassdesk · spring 2026",
        body: "Menu bar, dock, draggable windows\n\n\
               • Pointer-capture drags committed through the command surface\n\
               • Dock reads the minimized flag before deciding restore vs launch\n\
               • Keyboard shortcuts resolve against the focused window\n\
               • The finder draws its own frame; everything else shares chrome",
    },
    Note {
        title: "Gimmick apps",
        dateline: "glassdesk · earlier",
        body: "Messages, FaceTime, Siri\n\n\
               • Chat assistant riding an OpenAI-compatible completion endpoint\n\
               • Face filters drawn from a fixed landmark set onto a canvas\n\
               • Voice intents parsed before anything reaches the assistant",
    },
];

fn note_preview(note: &Note) -> &'static str {
    note.body.split('\n').next().unwrap_or_default()
}

/// Experience notes: list on the left, reader on the right.
#[component]
pub fn NotesApp(ctx: AppMountContext) -> impl IntoView {
    let _ = ctx;
    let selected = create_rw_signal(0usize);

    let current = move || NOTES[selected.get().min(NOTES.len() - 1)];

    view! {
        <div class="notes-shell">
            <aside class="notes-list" aria-label="Notes">
                <div class="notes-list-header">
                    <h2>"Experience"</h2>
                    <p>{format!("{} notes", NOTES.len())}</p>
                </div>
                {NOTES
                    .iter()
                    .enumerate()
                    .map(|(idx, note)| {
                        view! {
                            <button
                                class=move || {
                                    if selected.get() == idx {
                                        "notes-list-item selected"
                                    } else {
                                        "notes-list-item"
                                    }
                                }
                                on:click=move |_| selected.set(idx)
                            >
                                <span class="note-title">{note.title}</span>
                                <span class="note-dateline">{note.dateline}</span>
                                <span class="note-preview">{note_preview(note)}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </aside>

            <section class="notes-reader">
                <header class="notes-reader-header">
                    <h1>{move || current().title}</h1>
                    <p>{move || current().dateline}</p>
                </header>
                <pre class="notes-reader-body">{move || current().body}</pre>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previews_take_the_first_body_line() {
        assert_eq!(
            note_preview(&NOTES[0]),
            "Registry, stacking authority, command surface"
        );
    }

    #[test]
    fn every_note_has_a_title_and_body() {
        for note in &NOTES {
            assert!(!note.title.is_empty());
            assert!(!note.body.is_empty());
        }
    }
}
