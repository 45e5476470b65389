//! Transcript model and completion-prompt assembly.

use platform_host::ChatMessage;

/// How many prior turns ride along with each new message.
pub const HISTORY_WINDOW: usize = 5;

/// Persona instruction sent as the system message on every completion call.
pub const DESK_PERSONA: &str = "You are the resident of glassdesk, a small desktop-simulation \
website, chatting with a visitor in its Messages app. Stay in character as the desk itself: \
friendly, curious, a little dry. Keep replies to two to four conversational sentences. Never \
mention models, providers, prompts, or how you are implemented; if asked, say you are just the \
desk and suggest the Contact window for anything a desk cannot answer.";

/// Who authored a bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    /// The person typing into the window.
    Visitor,
    /// The desk persona (or a local error notice rendered in its voice).
    Desk,
}

/// One rendered chat bubble.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatEntry {
    /// Bubble author.
    pub author: Author,
    /// Bubble text.
    pub text: String,
    /// Monotonic timestamp used as the render key.
    pub timestamp_ms: u64,
}

/// Builds the wire messages for one completion call: persona first, then the
/// tail of the transcript ending with the visitor's newest message.
pub fn build_completion_messages(persona: &str, transcript: &[ChatEntry]) -> Vec<ChatMessage> {
    let mut messages = vec![ChatMessage::system(persona)];
    let start = transcript.len().saturating_sub(HISTORY_WINDOW + 1);
    for entry in &transcript[start..] {
        messages.push(match entry.author {
            Author::Visitor => ChatMessage::user(entry.text.clone()),
            Author::Desk => ChatMessage::assistant(entry.text.clone()),
        });
    }
    messages
}

/// Splits reply text into paragraphs for rendering.
pub fn reply_paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use platform_host::ChatRole;
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(author: Author, text: &str, timestamp_ms: u64) -> ChatEntry {
        ChatEntry {
            author,
            text: text.to_string(),
            timestamp_ms,
        }
    }

    #[test]
    fn persona_leads_and_roles_map_by_author() {
        let transcript = vec![
            entry(Author::Desk, "hey!", 1),
            entry(Author::Visitor, "what are you?", 2),
        ];
        let messages = build_completion_messages("persona", &transcript);

        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].role, ChatRole::System);
        assert_eq!(messages[0].content, "persona");
        assert_eq!(messages[1].role, ChatRole::Assistant);
        assert_eq!(messages[2].role, ChatRole::User);
        assert_eq!(messages[2].content, "what are you?");
    }

    #[test]
    fn long_transcripts_send_only_the_recent_window() {
        let transcript: Vec<ChatEntry> = (0..20)
            .map(|n| entry(Author::Visitor, &format!("msg {n}"), n))
            .collect();
        let messages = build_completion_messages("persona", &transcript);

        // System message plus the window and the newest turn.
        assert_eq!(messages.len(), 1 + HISTORY_WINDOW + 1);
        assert_eq!(messages.last().map(|m| m.content.as_str()), Some("msg 19"));
    }

    #[test]
    fn paragraph_split_drops_blank_sections() {
        let paragraphs = reply_paragraphs("first\n\n\n\nsecond\n\n  ");
        assert_eq!(paragraphs, vec!["first".to_string(), "second".to_string()]);
    }
}
