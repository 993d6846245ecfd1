//! UI Errors

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum UiError {
    /// Exception thrown by a browser or toolkit call
    #[error("javascript error: {0}")]
    Js(String),
    #[error("unexpected reply: {0}")]
    Reply(String),
    #[error("missing element: {0}")]
    Missing(String),
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        if let Some(s) = value.as_string() {
            return UiError::Js(s);
        }
        match value.dyn_ref::<js_sys::Error>() {
            Some(err) => UiError::Js(String::from(err.message())),
            None => UiError::Js(format!("{:?}", value)),
        }
    }
}

impl From<serde_wasm_bindgen::Error> for UiError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        UiError::Reply(err.to_string())
    }
}
