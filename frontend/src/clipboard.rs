use web_sys::wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Window unavailable")]
    WindowUnavailable,
    #[error("Clipboard write rejected: {0}")]
    Rejected(String),
}

impl From<JsValue> for ClipboardError {
    fn from(js_val: JsValue) -> Self {
        let js_err = js_sys::Error::from(js_val);
        Self::Rejected(
            js_err
                .message()
                .as_string()
                .unwrap_or_else(|| "unknown error".to_owned()),
        )
    }
}

pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::WindowUnavailable)?;
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise).await?;
    Ok(())
}
