//! Page Event Utilities
//!
//! Page-lifetime event listeners and one-shot timers for server-rendered pages.
//! Closures handed to the browser are leaked on purpose: they live until unload.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::DocumentReadyState;

/// True while the document has not yet fired `DOMContentLoaded`
pub fn is_loading(ready_state: DocumentReadyState) -> bool {
    ready_state == DocumentReadyState::Loading
}

/// Run `init` once the page content is ready.
///
/// The module usually finishes instantiating after parsing is done, in which
/// case `init` runs immediately instead of waiting for an event that already fired.
pub fn on_content_ready<F>(init: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let doc = document()?;
    if !is_loading(doc.ready_state()) {
        init();
        return Ok(());
    }

    let cb = Closure::once_into_js(init);
    doc.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref())
}

/// Bind a listener on any target for the lifetime of the page
pub fn bind_listener<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Bind a listener on `document` for the lifetime of the page
pub fn bind_document_listener<F>(event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let doc = document()?;
    bind_listener(&doc, event, handler)
}

/// Fire-and-forget timer. There is no way to cancel it once scheduled.
pub fn schedule_once<F>(delay_ms: u32, action: F)
where
    F: FnOnce() + 'static,
{
    Timeout::new(delay_ms, action).forget();
}

/// Current document, or an error outside a browser window
pub fn document() -> Result<web_sys::Document, JsValue> {
    web_sys::window()
        .and_then(|win| win.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

/// Elements matching `selector`, in document order
pub fn query_all(root: &web_sys::Document, selector: &str) -> Result<Vec<web_sys::Element>, JsValue> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect())
}

/// Whether `target` is `container` itself or one of its descendants
pub fn event_within(target: Option<&web_sys::EventTarget>, container: &web_sys::Element) -> bool {
    match target.and_then(|t| t.dyn_ref::<web_sys::Node>()) {
        Some(node) => container.contains(Some(node)),
        None => false,
    }
}
