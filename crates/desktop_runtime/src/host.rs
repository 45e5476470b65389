//! Host-side runtime helpers: service access, registry effect execution, and
//! browser environment queries.

use std::rc::Rc;

use leptos::{logging, spawn_local};
use platform_host::{
    AssistantService, ExternalUrlService, HostServices, PrefsStore, SessionFlags, SpeechService,
};
use window_registry::{RegistryEffect, WindowId, WindowRect};

/// Service bundle plus the effect/viewport glue the shell needs from its
/// host.
#[derive(Clone)]
pub struct DesktopHostContext {
    services: HostServices,
}

impl DesktopHostContext {
    /// Wraps an injected service bundle.
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Preference storage.
    pub fn prefs(&self) -> Rc<dyn PrefsStore> {
        Rc::clone(&self.services.prefs)
    }

    /// Session-scoped flags (lock state).
    pub fn session_flags(&self) -> Rc<dyn SessionFlags> {
        Rc::clone(&self.services.session_flags)
    }

    /// Text-completion assistant.
    pub fn assistant(&self) -> Rc<dyn AssistantService> {
        Rc::clone(&self.services.assistant)
    }

    /// One-shot speech capture.
    pub fn speech(&self) -> Rc<dyn SpeechService> {
        Rc::clone(&self.services.speech)
    }

    /// The full bundle, for handing to mounted apps.
    pub fn services(&self) -> HostServices {
        self.services.clone()
    }

    /// Opens a URL outside the shell; failures are logged, never surfaced.
    pub fn open_external_url(&self, url: impl Into<String>) {
        let url = url.into();
        let service: Rc<dyn ExternalUrlService> = Rc::clone(&self.services.external_urls);
        spawn_local(async move {
            if let Err(err) = service.open_url(&url).await {
                logging::warn!("external url open failed: {err}");
            }
        });
    }

    /// Executes one registry effect emitted by a dispatched command.
    pub fn run_registry_effect(&self, effect: RegistryEffect) {
        match effect {
            RegistryEffect::FocusTransferred(window_id) => focus_window_input(&window_id),
        }
    }

    /// Returns the viewport rect available to managed windows, below the
    /// menu bar.
    pub fn desktop_viewport_rect(&self, menu_bar_height_px: i32) -> WindowRect {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window();
            let read = |value: Option<Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>>| {
                value
                    .and_then(|r| r.ok())
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0) as i32
            };
            let width = read(window.as_ref().map(|w| w.inner_width()));
            let height = read(window.as_ref().map(|w| w.inner_height()));
            WindowRect {
                x: 0,
                y: menu_bar_height_px,
                w: width,
                h: (height - menu_bar_height_px).max(0),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            WindowRect {
                x: 0,
                y: menu_bar_height_px,
                w: 1280,
                h: 800 - menu_bar_height_px,
            }
        }
    }
}

/// Moves DOM focus into the newly focused window's primary input, when the
/// app declares one via [`desktop_app_contract::window_primary_input_dom_id`].
fn focus_window_input(window_id: &WindowId) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let dom_id = desktop_app_contract::window_primary_input_dom_id(window_id);
        let target = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(&dom_id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        if let Some(element) = target {
            let _ = element.focus();
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = window_id;
    }
}
