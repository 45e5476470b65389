//! Bundled host services injected into the desktop runtime.

use std::rc::Rc;

use crate::assistant::{AssistantService, NoopAssistantService, ScriptedAssistantService};
use crate::external_url::{ExternalUrlService, NoopExternalUrlService};
use crate::prefs::{MemoryPrefsStore, PrefsStore};
use crate::session::{MemorySessionFlags, SessionFlags};
use crate::speech::{NoopSpeechService, SpeechService};

/// Every host service the shell consumes, behind trait objects.
///
/// The entry layer assembles this from browser adapters; tests assemble it
/// from the in-memory implementations.
#[derive(Clone)]
pub struct HostServices {
    /// Lightweight preference storage.
    pub prefs: Rc<dyn PrefsStore>,
    /// Session-scoped flags (lock state).
    pub session_flags: Rc<dyn SessionFlags>,
    /// Text-completion assistant.
    pub assistant: Rc<dyn AssistantService>,
    /// One-shot speech capture.
    pub speech: Rc<dyn SpeechService>,
    /// External navigation.
    pub external_urls: Rc<dyn ExternalUrlService>,
}

impl HostServices {
    /// In-memory bundle with no assistant configured.
    pub fn memory() -> Self {
        Self {
            prefs: Rc::new(MemoryPrefsStore::default()),
            session_flags: Rc::new(MemorySessionFlags::default()),
            assistant: Rc::new(NoopAssistantService),
            speech: Rc::new(NoopSpeechService),
            external_urls: Rc::new(NoopExternalUrlService),
        }
    }

    /// In-memory bundle around a scripted assistant, for tests.
    pub fn scripted(assistant: ScriptedAssistantService) -> Self {
        Self {
            assistant: Rc::new(assistant),
            ..Self::memory()
        }
    }
}
