//! Voice assistant panel: local intents for launch/lock/dismiss, speech
//! capture, and short spoken-style chat replies.

mod intent;

pub use intent::{parse_intent, SiriIntent};

use desktop_app_contract::{AppCommand, ApplicationId};
use leptos::*;
use platform_host::{next_monotonic_timestamp_ms, ChatMessage, HostServices};

/// Chat persona for the voice surface: short plain sentences that read well
/// aloud, no formatting.
const SPOKEN_PERSONA: &str = "You are the voice assistant of glassdesk, a small \
desktop-simulation website. Answer in one to three short plain sentences with no markdown, \
no emojis, and no lists. Stay in character as the desk's assistant and never mention models, \
providers, or how you are implemented.";

#[derive(Debug, Clone, PartialEq)]
struct SiriLine {
    timestamp_ms: u64,
    is_user: bool,
    text: String,
}

/// Assistant popup contents. Hosted as an overlay, not a managed window;
/// `commands` routes into the shell's normal launch path.
#[component]
pub fn SiriPanel(services: HostServices, commands: Callback<AppCommand>) -> impl IntoView {
    let lines = create_rw_signal(Vec::<SiriLine>::new());
    let draft = create_rw_signal(String::new());
    let busy = create_rw_signal(false);
    let listening = create_rw_signal(false);

    let push_line = move |is_user: bool, text: String| {
        lines.update(|all| {
            all.push(SiriLine {
                timestamp_ms: next_monotonic_timestamp_ms(),
                is_user,
                text,
            });
        });
    };

    let services_for_handle = services.clone();
    let handle_utterance = move |raw: String| {
        let text = raw.trim().to_string();
        if text.is_empty() {
            return;
        }
        push_line(true, text.clone());

        match parse_intent(&text) {
            SiriIntent::OpenApp(app_id) => {
                commands.call(AppCommand::OpenApp(ApplicationId::trusted(app_id)));
                push_line(false, format!("Opening {app_id}."));
            }
            SiriIntent::Lock => {
                push_line(false, "Locking the screen.".to_string());
                commands.call(AppCommand::LockSession);
            }
            SiriIntent::Dismiss => commands.call(AppCommand::CloseWindow),
            SiriIntent::Chat(message) => {
                busy.set(true);
                let assistant = services_for_handle.assistant.clone();
                spawn_local(async move {
                    let messages = vec![
                        ChatMessage::system(SPOKEN_PERSONA),
                        ChatMessage::user(message),
                    ];
                    let reply = assistant.complete(&messages).await;
                    busy.set(false);
                    match reply {
                        Ok(text) => push_line(false, text),
                        Err(err) => {
                            logging::warn!("assistant completion failed: {err}");
                            push_line(false, "I can't reach my voice right now.".to_string());
                        }
                    }
                });
            }
        }
    };

    let speech_available = services.speech.is_available();
    let services_for_mic = services.clone();
    let handle_for_mic = handle_utterance.clone();
    let capture = move |_| {
        if listening.get_untracked() {
            return;
        }
        listening.set(true);
        let speech = services_for_mic.speech.clone();
        let handle = handle_for_mic.clone();
        spawn_local(async move {
            let result = speech.capture_once().await;
            listening.set(false);
            match result {
                Ok(transcript) => handle(transcript),
                Err(err) => {
                    logging::warn!("speech capture failed: {err}");
                    push_line(false, "I didn't catch that.".to_string());
                }
            }
        });
    };

    let handle_for_submit = handle_utterance;
    let submit = move || {
        let text = draft.get_untracked();
        draft.set(String::new());
        handle_for_submit(text);
    };
    let submit_for_click = submit.clone();
    let submit_for_enter = submit;

    view! {
        <div class="siri-panel">
            <div class=move || {
                if listening.get() { "siri-orb listening" } else { "siri-orb" }
            }>
                <span aria-hidden="true"></span>
            </div>

            <div class="siri-transcript" role="log" aria-live="polite">
                <Show when=move || lines.get().is_empty() fallback=|| ()>
                    <p class="siri-hint">"Try: \u{201c}open projects\u{201d} or \u{201c}lock the screen\u{201d}"</p>
                </Show>
                <For each=move || lines.get() key=|line| line.timestamp_ms let:line>
                    <p class=if line.is_user { "siri-line user" } else { "siri-line reply" }>
                        {line.text.clone()}
                    </p>
                </For>
                <Show when=move || busy.get() fallback=|| ()>
                    <p class="siri-line reply thinking">"…"</p>
                </Show>
            </div>

            <div class="siri-compose">
                <input
                    class="siri-input"
                    type="text"
                    placeholder="Ask something"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit_for_enter();
                        }
                    }
                />
                <button
                    class=move || {
                        if listening.get() { "siri-mic listening" } else { "siri-mic" }
                    }
                    aria-label="Speak"
                    disabled=!speech_available
                    on:click=capture
                >
                    <system_ui::Icon icon=system_ui::IconName::Mic size=system_ui::IconSize::Sm />
                </button>
                <button class="siri-send" aria-label="Send" on:click=move |_| submit_for_click()>
                    "↑"
                </button>
            </div>
        </div>
    }
}
