// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use dioxus_logger::tracing::warn;
    use std::time::Duration;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::Window;

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    /// Writes to the system clipboard through the browser's async clipboard API.
    #[derive(Clone, Copy)]
    pub struct ClipboardWriter;

    impl ClipboardWriter {
        pub async fn set(&mut self, text: String) -> bool {
            match web_sys::window().map(|win: Window| win.navigator().clipboard()) {
                Some(clipboard) => {
                    let promise = clipboard.write_text(&text);
                    let ok = JsFuture::from(promise).await.is_ok();
                    if !ok {
                        warn!("clipboard write was rejected by the browser");
                    }
                    ok
                }
                _ => false,
            }
        }
    }

    pub fn use_clipboard_writer() -> ClipboardWriter {
        ClipboardWriter
    }

    /// Whether `window.ethereum` reports itself as MetaMask.
    pub fn injected_is_metamask() -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let Ok(ethereum) = js_sys::Reflect::get(&window, &JsValue::from_str("ethereum")) else {
            return false;
        };
        if ethereum.is_undefined() || ethereum.is_null() {
            return false;
        }
        js_sys::Reflect::get(&ethereum, &JsValue::from_str("isMetaMask"))
            .map(|flag| flag.as_bool() == Some(true))
            .unwrap_or(false)
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use dioxus_clipboard::prelude::*;
    use dioxus_logger::tracing::warn;
    use std::time::Duration;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    #[derive(Clone, Copy)]
    pub struct ClipboardWriter(UseClipboard);

    impl ClipboardWriter {
        pub async fn set(&mut self, text: String) -> bool {
            match self.0.set(text) {
                Ok(()) => true,
                Err(e) => {
                    warn!("clipboard write failed: {:?}", e);
                    false
                }
            }
        }
    }

    /// Must be called like any other hook, at the top of a component.
    pub fn use_clipboard_writer() -> ClipboardWriter {
        ClipboardWriter(use_clipboard())
    }

    /// There is no injected browser provider outside the web build.
    pub fn injected_is_metamask() -> bool {
        false
    }
}
