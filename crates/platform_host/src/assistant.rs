//! Text-completion host-service contracts and chat transcript models.

use std::{cell::RefCell, collections::VecDeque, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`AssistantService`].
pub type AssistantFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Role of a chat transcript entry, in completion-API wire casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// Persona/system instruction.
    System,
    /// Visitor-authored message.
    User,
    /// Model-authored reply.
    Assistant,
}

/// One transcript entry in the wire shape the completion endpoint expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Speaker role.
    pub role: ChatRole,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// Builds a system-role message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    /// Builds a user-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    /// Builds an assistant-role message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Host service producing one completion for a prepared message list.
///
/// The message list already contains the system prompt and any history
/// window; the service only transports it and returns the reply text.
pub trait AssistantService {
    /// Requests a single completion.
    fn complete<'a>(
        &'a self,
        messages: &'a [ChatMessage],
    ) -> AssistantFuture<'a, Result<String, String>>;
}

/// Assistant stub for targets with no completion endpoint configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAssistantService;

impl AssistantService for NoopAssistantService {
    fn complete<'a>(
        &'a self,
        _messages: &'a [ChatMessage],
    ) -> AssistantFuture<'a, Result<String, String>> {
        Box::pin(async { Err("assistant endpoint not configured".to_string()) })
    }
}

/// Deterministic assistant that replays queued replies, for tests and for
/// running the shell without network access.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAssistantService {
    replies: Rc<RefCell<VecDeque<String>>>,
}

impl ScriptedAssistantService {
    /// Creates a scripted assistant from a reply queue.
    pub fn new(replies: impl IntoIterator<Item = String>) -> Self {
        Self {
            replies: Rc::new(RefCell::new(replies.into_iter().collect())),
        }
    }

    /// Appends one reply to the queue.
    pub fn push_reply(&self, reply: impl Into<String>) {
        self.replies.borrow_mut().push_back(reply.into());
    }
}

impl AssistantService for ScriptedAssistantService {
    fn complete<'a>(
        &'a self,
        _messages: &'a [ChatMessage],
    ) -> AssistantFuture<'a, Result<String, String>> {
        Box::pin(async move {
            self.replies
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| "scripted assistant has no reply queued".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn scripted_assistant_replays_replies_in_order() {
        let assistant = ScriptedAssistantService::new(vec!["one".to_string()]);
        assistant.push_reply("two");
        let service: &dyn AssistantService = &assistant;

        let prompt = [ChatMessage::user("hi")];
        assert_eq!(block_on(service.complete(&prompt)), Ok("one".to_string()));
        assert_eq!(block_on(service.complete(&prompt)), Ok("two".to_string()));
        assert!(block_on(service.complete(&prompt)).is_err());
    }

    #[test]
    fn noop_assistant_reports_missing_configuration() {
        let service: &dyn AssistantService = &NoopAssistantService;
        let result = block_on(service.complete(&[ChatMessage::user("hi")]));
        assert!(result.is_err());
    }

    #[test]
    fn chat_roles_serialize_lowercase() {
        let message = ChatMessage::assistant("hello");
        let json = serde_json::to_value(&message).expect("serialize");
        assert_eq!(json["role"], "assistant");
    }
}
