//! Grid failure types

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum GridError {
    /// The caller handed over no container element. Fatal at construction,
    /// before anything in the DOM is touched.
    #[error("the grid container element does not exist; pass a valid element reference")]
    MissingContainer,
    #[error("invalid grid configuration: {0}")]
    BadConfig(String),
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl GridError {
    /// Wrap an unexpected error value coming back from a web-sys call.
    pub(crate) fn from_js(value: JsValue) -> Self {
        let detail = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        GridError::Dom(detail)
    }
}

impl From<GridError> for JsValue {
    fn from(err: GridError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}
