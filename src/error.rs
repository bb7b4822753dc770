use thiserror::Error;

/// Failures talking to the browser. Callers log these and carry on; a page
/// missing a piece of markup or a storage backend still renders.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("browser window is unavailable")]
    NoWindow,
    #[error("document is unavailable")]
    NoDocument,
    #[error("local storage is unavailable")]
    StorageUnavailable,
    #[error("javascript call failed: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request could not be built: {0}")]
    Request(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
}
