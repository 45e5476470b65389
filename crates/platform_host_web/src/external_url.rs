//! `window.open`-backed external navigation.

use platform_host::{ExternalUrlFuture, ExternalUrlService};

/// Opens external links in a new browsing context.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebExternalUrlService;

impl ExternalUrlService for WebExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
                window
                    .open_with_url_and_target(url, "_blank")
                    .map_err(|e| format!("window.open failed: {e:?}"))?;
                Ok(())
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = url;
                Ok(())
            }
        })
    }
}
