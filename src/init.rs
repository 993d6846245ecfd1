//! Page-Ready Initializer
//!
//! Wires every binding once per page load. A failing binding is logged and
//! the remaining ones are still installed.

use crate::config::PageConfig;
use crate::error::UiError;
use crate::{alerts, confirm, sidebar, tooltips};

pub fn init_page() {
    let doc = match page_events::document() {
        Ok(doc) => doc,
        Err(e) => {
            web_sys::console::error_1(&format!("[Init] {}", UiError::from(e)).into());
            return;
        }
    };
    let config = PageConfig::from_document(&doc);

    report("Sidebar", sidebar::bind(&doc, &config).map(|_| None));
    report("Alerts", alerts::bind(&doc, &config).map(Some));
    report("Confirm", confirm::bind(&doc).map(Some));
    report("Tooltips", tooltips::bind(&doc, &config).map(Some));
}

fn report(component: &str, result: Result<Option<usize>, UiError>) {
    match result {
        Ok(Some(count)) => {
            web_sys::console::log_1(&format!("[Init] {}: {} element(s) bound", component, count).into());
        }
        Ok(None) => {}
        Err(e) => {
            web_sys::console::error_1(&format!("[{}] Binding failed: {}", component, e).into());
        }
    }
}
