//! Messages app: a chat thread with the site's resident persona, backed by
//! the host's completion service.

mod chat;

pub use chat::{build_completion_messages, reply_paragraphs, Author, ChatEntry, DESK_PERSONA};

use desktop_app_contract::{window_primary_input_dom_id, AppMountContext};
use leptos::*;
use platform_host::next_monotonic_timestamp_ms;

fn desk_entry(text: impl Into<String>) -> ChatEntry {
    ChatEntry {
        author: Author::Desk,
        text: text.into(),
        timestamp_ms: next_monotonic_timestamp_ms(),
    }
}

fn visitor_entry(text: impl Into<String>) -> ChatEntry {
    ChatEntry {
        author: Author::Visitor,
        text: text.into(),
        timestamp_ms: next_monotonic_timestamp_ms(),
    }
}

/// Chat window view.
#[component]
pub fn MessagesApp(ctx: AppMountContext) -> impl IntoView {
    let services = ctx.services.clone();
    let input_dom_id = window_primary_input_dom_id(&ctx.window_id);

    let transcript = create_rw_signal(vec![desk_entry(
        "hey, you found the Messages window. ask me anything about this desk.",
    )]);
    let draft = create_rw_signal(String::new());
    let pending = create_rw_signal(false);

    let send = move || {
        let text = draft.get_untracked().trim().to_string();
        if text.is_empty() || pending.get_untracked() {
            return;
        }
        draft.set(String::new());
        transcript.update(|entries| entries.push(visitor_entry(text)));
        pending.set(true);

        let assistant = services.assistant.clone();
        spawn_local(async move {
            let messages = build_completion_messages(DESK_PERSONA, &transcript.get_untracked());
            let reply = assistant.complete(&messages).await;
            pending.set(false);
            transcript.update(|entries| match reply {
                Ok(text) => entries.push(desk_entry(text)),
                Err(err) => {
                    logging::warn!("chat completion failed: {err}");
                    entries.push(desk_entry(
                        "…the line to my brain seems to be down. try again in a bit?",
                    ));
                }
            });
        });
    };

    let send_for_click = send.clone();
    let send_for_enter = send;

    view! {
        <div class="messages-shell">
            <div class="messages-thread" role="log" aria-live="polite">
                <For
                    each=move || transcript.get()
                    key=|entry| entry.timestamp_ms
                    let:entry
                >
                    <div class=match entry.author {
                        Author::Visitor => "chat-bubble visitor",
                        Author::Desk => "chat-bubble desk",
                    }>
                        {reply_paragraphs(&entry.text)
                            .into_iter()
                            .map(|paragraph| view! { <p>{paragraph}</p> })
                            .collect_view()}
                    </div>
                </For>
                <Show when=move || pending.get() fallback=|| ()>
                    <div class="chat-bubble desk typing" aria-label="Reply pending">
                        <span>"•"</span>
                        <span>"•"</span>
                        <span>"•"</span>
                    </div>
                </Show>
            </div>

            <div class="messages-compose">
                <input
                    id=input_dom_id
                    class="messages-input"
                    type="text"
                    placeholder="iMessage"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            send_for_enter();
                        }
                    }
                />
                <button
                    class="messages-send"
                    aria-label="Send"
                    disabled=move || pending.get()
                    on:click=move |_| send_for_click()
                >
                    "↑"
                </button>
            </div>
        </div>
    }
}
