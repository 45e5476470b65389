//! Utterance parsing for the voice assistant.
//!
//! Launch, lock, and dismiss phrases are handled locally; everything else
//! falls through to the completion service as plain chat.

/// What the assistant should do with an utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiriIntent {
    /// Launch (or surface) an app by catalog id.
    OpenApp(&'static str),
    /// Return to the lock screen.
    Lock,
    /// Close the assistant popup.
    Dismiss,
    /// Hand the utterance to the completion service.
    Chat(String),
}

/// Spoken names (and common mishearings) mapped to catalog ids.
const APP_ALIASES: [(&str, &str); 18] = [
    ("projects", "projects"),
    ("finder", "projects"),
    ("files", "projects"),
    ("experience", "experience"),
    ("notes", "experience"),
    ("skills", "skills"),
    ("terminal", "skills"),
    ("blog", "blog"),
    ("safari", "blog"),
    ("gallery", "gallery"),
    ("photos", "gallery"),
    ("contact", "contact"),
    ("mail", "contact"),
    ("facetime", "facetime"),
    ("camera", "facetime"),
    ("messages", "messages"),
    ("chat", "messages"),
    ("resume", "resume"),
];

const WAKE_PREFIXES: [&str; 5] = ["hey siri", "siri", "please", "could you", "can you"];
const OPEN_VERBS: [&str; 6] = ["open up", "open", "launch", "start", "show me", "show"];
const LOCK_PHRASES: [&str; 4] = ["lock", "lock screen", "lock the screen", "lock it"];
const DISMISS_PHRASES: [&str; 5] = ["close", "goodbye", "bye", "dismiss", "never mind"];

fn normalize(raw: &str) -> String {
    let cleaned: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | '!' | '?'))
        .collect();
    let mut text = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut stripped = true;
    while stripped {
        stripped = false;
        for prefix in WAKE_PREFIXES {
            if let Some(rest) = text.strip_prefix(prefix) {
                text = rest.trim_start().to_string();
                stripped = true;
            }
        }
    }
    text
}

fn app_for_name(name: &str) -> Option<&'static str> {
    let name = name
        .strip_prefix("the ")
        .or_else(|| name.strip_prefix("my "))
        .unwrap_or(name);
    APP_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, id)| *id)
}

/// Parses one utterance into an intent.
///
/// Unknown launch targets fall through to chat so a mumbled app name still
/// gets a friendly reply instead of silence.
pub fn parse_intent(raw: &str) -> SiriIntent {
    let text = normalize(raw);
    if text.is_empty() {
        return SiriIntent::Chat(raw.trim().to_string());
    }

    if LOCK_PHRASES.contains(&text.as_str()) {
        return SiriIntent::Lock;
    }
    if DISMISS_PHRASES.contains(&text.as_str()) {
        return SiriIntent::Dismiss;
    }

    for verb in OPEN_VERBS {
        if let Some(rest) = text.strip_prefix(verb) {
            let target = rest.trim();
            if target.is_empty() {
                continue;
            }
            if let Some(app_id) = app_for_name(target) {
                return SiriIntent::OpenApp(app_id);
            }
        }
    }

    SiriIntent::Chat(raw.trim().to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn open_phrases_launch_catalog_apps() {
        assert_eq!(
            parse_intent("Hey Siri, open Projects!"),
            SiriIntent::OpenApp("projects")
        );
        assert_eq!(
            parse_intent("show me the gallery"),
            SiriIntent::OpenApp("gallery")
        );
        assert_eq!(parse_intent("launch mail"), SiriIntent::OpenApp("contact"));
        assert_eq!(
            parse_intent("please open up messages"),
            SiriIntent::OpenApp("messages")
        );
    }

    #[test]
    fn lock_and_dismiss_phrases_short_circuit() {
        assert_eq!(parse_intent("lock the screen"), SiriIntent::Lock);
        assert_eq!(parse_intent("Lock it."), SiriIntent::Lock);
        assert_eq!(parse_intent("bye"), SiriIntent::Dismiss);
        assert_eq!(parse_intent("never mind"), SiriIntent::Dismiss);
    }

    #[test]
    fn unknown_targets_fall_through_to_chat() {
        assert_eq!(
            parse_intent("open the flux capacitor"),
            SiriIntent::Chat("open the flux capacitor".to_string())
        );
    }

    #[test]
    fn questions_go_to_chat_verbatim() {
        assert_eq!(
            parse_intent("  what can you do?  "),
            SiriIntent::Chat("what can you do?".to_string())
        );
    }
}
