//! Speech-capture host-service contracts.

use std::{future::Future, pin::Pin};

/// Object-safe boxed future used by [`SpeechService`].
pub type SpeechFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that captures one spoken utterance and returns its
/// transcript.
///
/// Capture is one-shot: the adapter listens until the recognizer reports a
/// final result (or errors), then resolves. Continuous dictation is not part
/// of this contract.
pub trait SpeechService {
    /// Returns whether speech capture is available on this host.
    fn is_available(&self) -> bool;

    /// Captures a single utterance.
    fn capture_once(&self) -> SpeechFuture<'_, Result<String, String>>;
}

/// Speech stub for hosts without a recognizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpeechService;

impl SpeechService for NoopSpeechService {
    fn is_available(&self) -> bool {
        false
    }

    fn capture_once(&self) -> SpeechFuture<'_, Result<String, String>> {
        Box::pin(async { Err("speech recognition unavailable".to_string()) })
    }
}
