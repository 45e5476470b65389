//! One-shot speech capture over the Web Speech API.
//!
//! Browsers still ship the recognizer behind a `webkit` prefix, so the
//! adapter reaches it through `js_sys::Reflect` rather than a typed binding
//! and reads the transcript out of the event object the same way.

use platform_host::{SpeechFuture, SpeechService};

/// Browser speech capture backed by `(webkit)SpeechRecognition`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebSpeechService;

#[cfg(target_arch = "wasm32")]
fn recognizer_constructor() -> Option<js_sys::Function> {
    use wasm_bindgen::{JsCast, JsValue};

    let window = web_sys::window()?;
    for name in ["SpeechRecognition", "webkitSpeechRecognition"] {
        if let Ok(value) = js_sys::Reflect::get(&window, &JsValue::from_str(name)) {
            if value.is_function() {
                return value.dyn_into().ok();
            }
        }
    }
    None
}

#[cfg(target_arch = "wasm32")]
async fn capture_once_web() -> Result<String, String> {
    use std::{cell::RefCell, rc::Rc};

    use futures::channel::oneshot;
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};

    let constructor =
        recognizer_constructor().ok_or_else(|| "speech recognition unavailable".to_string())?;
    let recognition = js_sys::Reflect::construct(&constructor, &js_sys::Array::new())
        .map_err(|e| format!("speech recognizer construction failed: {e:?}"))?;
    let _ = js_sys::Reflect::set(&recognition, &"lang".into(), &"en-US".into());
    let _ = js_sys::Reflect::set(&recognition, &"interimResults".into(), &JsValue::FALSE);
    let _ = js_sys::Reflect::set(&recognition, &"continuous".into(), &JsValue::FALSE);

    let (sender, receiver) = oneshot::channel::<Result<String, String>>();
    let sender = Rc::new(RefCell::new(Some(sender)));

    let result_sender = Rc::clone(&sender);
    let on_result = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
        let transcript = js_sys::Reflect::get(&event, &"results".into())
            .ok()
            .and_then(|results| js_sys::Reflect::get(&results, &0u32.into()).ok())
            .and_then(|result| js_sys::Reflect::get(&result, &0u32.into()).ok())
            .and_then(|alternative| js_sys::Reflect::get(&alternative, &"transcript".into()).ok())
            .and_then(|value| value.as_string());
        if let Some(sender) = result_sender.borrow_mut().take() {
            let _ = sender.send(transcript.ok_or_else(|| "empty transcript".to_string()));
        }
    });
    let error_sender = Rc::clone(&sender);
    let on_error = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
        let kind = js_sys::Reflect::get(&event, &"error".into())
            .ok()
            .and_then(|value| value.as_string())
            .unwrap_or_else(|| "unknown".to_string());
        if let Some(sender) = error_sender.borrow_mut().take() {
            let _ = sender.send(Err(format!("speech recognition error: {kind}")));
        }
    });
    let end_sender = Rc::clone(&sender);
    let on_end = Closure::<dyn FnMut(JsValue)>::new(move |_event: JsValue| {
        // Fires after onresult/onerror too; the oneshot sender is already
        // consumed in those cases.
        if let Some(sender) = end_sender.borrow_mut().take() {
            let _ = sender.send(Err("no speech detected".to_string()));
        }
    });

    let _ = js_sys::Reflect::set(&recognition, &"onresult".into(), on_result.as_ref());
    let _ = js_sys::Reflect::set(&recognition, &"onerror".into(), on_error.as_ref());
    let _ = js_sys::Reflect::set(&recognition, &"onend".into(), on_end.as_ref());

    let start: js_sys::Function = js_sys::Reflect::get(&recognition, &"start".into())
        .map_err(|e| format!("recognizer has no start: {e:?}"))?
        .dyn_into()
        .map_err(|_| "recognizer start is not callable".to_string())?;
    start
        .call0(&recognition)
        .map_err(|e| format!("speech start failed: {e:?}"))?;

    let outcome = receiver
        .await
        .map_err(|_| "speech capture cancelled".to_string());

    // Handlers must outlive the recognition session.
    drop(on_result);
    drop(on_error);
    drop(on_end);

    outcome?
}

impl SpeechService for WebSpeechService {
    fn is_available(&self) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            recognizer_constructor().is_some()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            false
        }
    }

    fn capture_once(&self) -> SpeechFuture<'_, Result<String, String>> {
        #[cfg(target_arch = "wasm32")]
        {
            Box::pin(capture_once_web())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Box::pin(async { Err("speech recognition unavailable".to_string()) })
        }
    }
}
