//! `sessionStorage`-backed session flags.

use platform_host::SessionFlags;

/// Browser session flags backed by `window.sessionStorage`.
///
/// The lock screen stores its unlocked flag here so a reload inside the same
/// tab session skips the password, while a fresh session locks again.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebSessionFlags;

#[cfg(target_arch = "wasm32")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

impl SessionFlags for WebSessionFlags {
    fn get_flag(&self, key: &str) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            session_storage()
                .and_then(|storage| storage.get_item(key).ok().flatten())
                .map(|raw| raw == "true")
                .unwrap_or(false)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            false
        }
    }

    fn set_flag(&self, key: &str, value: bool) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(storage) = session_storage() {
                let _ = storage.set_item(key, if value { "true" } else { "false" });
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
        }
    }

    fn clear_flag(&self, key: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(storage) = session_storage() {
                let _ = storage.remove_item(key);
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
        }
    }
}
