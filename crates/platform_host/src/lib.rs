//! Typed host-service contracts and shared models used across the desktop
//! runtime and its browser adapters.
//!
//! This crate is the API boundary for everything the shell needs from its
//! host environment: preference and session storage, the text-completion
//! assistant, speech capture, external navigation, and time. Concrete
//! browser adapters live in `platform_host_web`; the in-memory and no-op
//! implementations here keep the runtime testable without a browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod assistant;
pub mod external_url;
pub mod host;
pub mod prefs;
pub mod session;
pub mod speech;
pub mod time;

pub use assistant::{
    AssistantFuture, AssistantService, ChatMessage, ChatRole, NoopAssistantService,
    ScriptedAssistantService,
};
pub use external_url::{ExternalUrlFuture, ExternalUrlService, NoopExternalUrlService};
pub use host::HostServices;
pub use prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture,
};
pub use session::{MemorySessionFlags, SessionFlags};
pub use speech::{NoopSpeechService, SpeechFuture, SpeechService};
pub use time::{next_monotonic_timestamp_ms, unix_time_ms_now};
