//! Fetch-based completion client for the chat assistant and voice assistant.

use platform_host::{AssistantFuture, AssistantService, ChatMessage};
use serde::Deserialize;
use serde_json::json;

/// Completion endpoint configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantEndpoint {
    /// OpenAI-compatible chat-completions URL.
    pub url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Bearer token, when the endpoint requires one.
    pub api_key: Option<String>,
}

impl Default for AssistantEndpoint {
    fn default() -> Self {
        Self {
            url: "https://api.groq.com/openai/v1/chat/completions".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            api_key: None,
        }
    }
}

/// Browser assistant adapter speaking the OpenAI-compatible chat wire shape.
#[derive(Debug, Clone)]
pub struct FetchAssistantService {
    endpoint: AssistantEndpoint,
}

impl FetchAssistantService {
    /// Creates a client for the given endpoint.
    pub fn new(endpoint: AssistantEndpoint) -> Self {
        Self { endpoint }
    }
}

/// Serializes the request body for one completion call.
///
/// Sampling parameters favor short, steady replies.
pub fn completion_request_body(model: &str, messages: &[ChatMessage]) -> String {
    json!({
        "model": model,
        "messages": messages,
        "temperature": 0.7,
        "max_tokens": 200,
        "top_p": 0.9,
    })
    .to_string()
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: String,
}

/// Extracts the first reply from a raw completion response body.
///
/// # Errors
///
/// Returns an error for malformed JSON or an empty choice list.
pub fn reply_from_response_json(raw: &str) -> Result<String, String> {
    let response: CompletionResponse =
        serde_json::from_str(raw).map_err(|e| format!("malformed completion response: {e}"))?;
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| "completion response carried no choices".to_string())
}

#[cfg(target_arch = "wasm32")]
async fn fetch_completion(
    endpoint: &AssistantEndpoint,
    messages: &[ChatMessage],
) -> Result<String, String> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    let headers = web_sys::Headers::new().map_err(|e| format!("headers init failed: {e:?}"))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| format!("header set failed: {e:?}"))?;
    if let Some(key) = &endpoint.api_key {
        headers
            .set("Authorization", &format!("Bearer {key}"))
            .map_err(|e| format!("header set failed: {e:?}"))?;
    }

    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_headers(headers.as_ref());
    init.set_body(&JsValue::from_str(&completion_request_body(
        &endpoint.model,
        messages,
    )));

    let request = web_sys::Request::new_with_str_and_init(&endpoint.url, &init)
        .map_err(|e| format!("request build failed: {e:?}"))?;
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("completion request failed: {e:?}"))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| "fetch yielded a non-Response value".to_string())?;
    if !response.ok() {
        return Err(format!("completion endpoint returned {}", response.status()));
    }
    let body = JsFuture::from(
        response
            .text()
            .map_err(|e| format!("response body unavailable: {e:?}"))?,
    )
    .await
    .map_err(|e| format!("response body read failed: {e:?}"))?;
    let raw = body
        .as_string()
        .ok_or_else(|| "response body was not text".to_string())?;
    reply_from_response_json(&raw)
}

impl AssistantService for FetchAssistantService {
    fn complete<'a>(
        &'a self,
        messages: &'a [ChatMessage],
    ) -> AssistantFuture<'a, Result<String, String>> {
        #[cfg(target_arch = "wasm32")]
        {
            Box::pin(fetch_completion(&self.endpoint, messages))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = messages;
            Box::pin(async { Err("completion client requires a browser host".to_string()) })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_carries_model_messages_and_sampling() {
        let messages = [
            ChatMessage::system("persona"),
            ChatMessage::user("hello there"),
        ];
        let body: serde_json::Value =
            serde_json::from_str(&completion_request_body("test-model", &messages))
                .expect("body is json");

        assert_eq!(body["model"], "test-model");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "hello there");
        assert_eq!(body["max_tokens"], 200);
    }

    #[test]
    fn reply_extraction_takes_the_first_choice() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"hi!"}},{"message":{"role":"assistant","content":"second"}}]}"#;
        assert_eq!(reply_from_response_json(raw), Ok("hi!".to_string()));
    }

    #[test]
    fn reply_extraction_rejects_empty_and_malformed_bodies() {
        assert!(reply_from_response_json(r#"{"choices":[]}"#).is_err());
        assert!(reply_from_response_json("not json").is_err());
    }
}
