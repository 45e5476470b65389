//! Browser adapters for the [`platform_host`] service contracts.
//!
//! Every adapter gates its browser calls behind `#[cfg(target_arch =
//! "wasm32")]` with inert native fallbacks, so the crate compiles (and its
//! pure helpers test) on any target.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod adapters;
mod assistant;
mod external_url;
mod prefs;
mod session;
mod speech;

pub use adapters::{browser_host_services, completion_endpoint_from_env};
pub use assistant::{
    completion_request_body, reply_from_response_json, AssistantEndpoint, FetchAssistantService,
};
pub use external_url::WebExternalUrlService;
pub use prefs::WebPrefsStore;
pub use session::WebSessionFlags;
pub use speech::WebSpeechService;
