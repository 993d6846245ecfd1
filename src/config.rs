//! Page Configuration
//!
//! Element ids, selectors and timings. Pages can override any subset through
//! a JSON object in the `data-page-config` attribute of `<body>`.

use serde::Deserialize;

use crate::error::UiError;

/// Attribute on `<body>` holding JSON overrides
pub const CONFIG_ATTRIBUTE: &str = "data-page-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub sidebar_id: String,
    pub sidebar_toggle_id: String,
    /// Class whose presence means the sidebar is shown
    pub sidebar_shown_class: String,
    /// Outside clicks collapse the sidebar only below this viewport width
    pub sidebar_breakpoint_px: f64,
    pub alert_selector: String,
    pub alert_dismiss_delay_ms: u32,
    /// Classes that make a titled element eligible for a tooltip
    pub tooltip_classes: Vec<String>,
    pub completion_form_selector: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            sidebar_id: "sidebar".to_string(),
            sidebar_toggle_id: "sidebarCollapse".to_string(),
            sidebar_shown_class: "show".to_string(),
            sidebar_breakpoint_px: 992.0,
            alert_selector: ".alert-dismissible".to_string(),
            alert_dismiss_delay_ms: 5000,
            tooltip_classes: vec!["btn".to_string(), "btn-sm".to_string()],
            completion_form_selector: ".mark-complete-form".to_string(),
        }
    }
}

impl PageConfig {
    /// Parse overrides; fields left out keep their defaults
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Config for the current page. Bad overrides are logged and ignored.
    pub fn from_document(doc: &web_sys::Document) -> Self {
        let raw = doc
            .body()
            .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));
        match raw {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                web_sys::console::warn_1(&format!("[Init] Ignoring {}: {}", CONFIG_ATTRIBUTE, e).into());
                Self::default()
            }),
            None => Self::default(),
        }
    }
}
