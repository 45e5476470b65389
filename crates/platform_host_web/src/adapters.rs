//! Constructor functions assembling the browser host-service bundle.

use std::rc::Rc;

use platform_host::{HostServices, NoopAssistantService};

use crate::{
    assistant::{AssistantEndpoint, FetchAssistantService},
    external_url::WebExternalUrlService,
    prefs::WebPrefsStore,
    session::WebSessionFlags,
    speech::WebSpeechService,
};

/// Reads the completion endpoint configuration baked in at build time.
///
/// Returns `None` when no API key was provided, in which case the assistant
/// apps degrade to their not-configured error bubbles.
pub fn completion_endpoint_from_env() -> Option<AssistantEndpoint> {
    let api_key = option_env!("GLASSDESK_COMPLETIONS_KEY")?;
    let mut endpoint = AssistantEndpoint {
        api_key: Some(api_key.to_string()),
        ..AssistantEndpoint::default()
    };
    if let Some(url) = option_env!("GLASSDESK_COMPLETIONS_URL") {
        endpoint.url = url.to_string();
    }
    if let Some(model) = option_env!("GLASSDESK_COMPLETIONS_MODEL") {
        endpoint.model = model.to_string();
    }
    Some(endpoint)
}

/// Builds the full browser service bundle for the desktop runtime.
pub fn browser_host_services(endpoint: Option<AssistantEndpoint>) -> HostServices {
    let assistant: Rc<dyn platform_host::AssistantService> = match endpoint {
        Some(endpoint) => Rc::new(FetchAssistantService::new(endpoint)),
        None => Rc::new(NoopAssistantService),
    };

    HostServices {
        prefs: Rc::new(WebPrefsStore),
        session_flags: Rc::new(WebSessionFlags),
        assistant,
        speech: Rc::new(WebSpeechService),
        external_urls: Rc::new(WebExternalUrlService),
    }
}
