//! Bootstrap Widget Bindings
//!
//! Calls into the page's global `bootstrap` bundle. Every call is fallible:
//! the bundle may be missing, and widgets throw on detached elements.

use wasm_bindgen::prelude::*;

use crate::error::UiError;

#[wasm_bindgen]
extern "C" {
    pub type AlertWidget;

    #[wasm_bindgen(catch, js_namespace = ["bootstrap", "Alert"], js_name = getOrCreateInstance)]
    fn alert_instance(element: &web_sys::Element) -> Result<AlertWidget, JsValue>;

    #[wasm_bindgen(catch, method)]
    fn close(this: &AlertWidget) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["bootstrap", "Tooltip"], js_name = getOrCreateInstance)]
    fn tooltip_instance(element: &web_sys::Element) -> Result<JsValue, JsValue>;
}

/// Close an alert with its fade-out transition
pub fn close_alert(element: &web_sys::Element) -> Result<(), UiError> {
    alert_instance(element)?.close()?;
    Ok(())
}

/// Attach a tooltip; an existing instance on the element is reused
pub fn attach_tooltip(element: &web_sys::Element) -> Result<(), UiError> {
    tooltip_instance(element)?;
    Ok(())
}
