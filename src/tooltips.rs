//! Tooltip Activation
//!
//! Titled button-styled controls get a Bootstrap tooltip; other titled
//! elements keep the browser's native title popup.

use page_events::query_all;

use crate::bootstrap;
use crate::config::PageConfig;
use crate::error::UiError;

/// Whether an element with this class attribute qualifies for a tooltip
pub fn qualifies(class_name: &str, tooltip_classes: &[String]) -> bool {
    class_name
        .split_whitespace()
        .any(|c| tooltip_classes.iter().any(|t| t == c))
}

/// Attach tooltips; returns how many elements qualified
pub fn bind(doc: &web_sys::Document, config: &PageConfig) -> Result<usize, UiError> {
    let mut attached = 0;
    for el in query_all(doc, "[title]")? {
        if !qualifies(&el.class_name(), &config.tooltip_classes) {
            continue;
        }
        match bootstrap::attach_tooltip(&el) {
            Ok(()) => attached += 1,
            Err(e) => web_sys::console::warn_1(&format!("[Tooltips] {}", e).into()),
        }
    }
    Ok(attached)
}
