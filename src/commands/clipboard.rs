//! Clipboard Commands
//!
//! `navigator.clipboard` wrapper.

use async_trait::async_trait;
use task_form::{Clipboard, CopyError};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// System clipboard via the async Clipboard API
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClipboard;

#[async_trait(?Send)]
impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), CopyError> {
        let window = web_sys::window().ok_or(CopyError::Unavailable)?;
        let navigator = window.navigator();

        // Missing outside secure contexts
        let available = js_sys::Reflect::get(navigator.as_ref(), &JsValue::from_str("clipboard"))
            .map(|value| !value.is_undefined() && !value.is_null())
            .unwrap_or(false);
        if !available {
            return Err(CopyError::Unavailable);
        }

        let promise = navigator.clipboard().write_text(text);
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| CopyError::Rejected(format!("{:?}", e)))
    }
}
