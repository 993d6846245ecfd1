//! Alert Auto-Dismiss
//!
//! Each dismissible alert present at ready time is closed once, after a fixed delay.
//! Alerts inserted later are not covered.

use page_events::{query_all, schedule_once};

use crate::bootstrap;
use crate::config::PageConfig;
use crate::error::UiError;

/// Schedule one dismissal per alert; returns how many were scheduled
pub fn bind(doc: &web_sys::Document, config: &PageConfig) -> Result<usize, UiError> {
    let alerts = query_all(doc, &config.alert_selector)?;
    let count = alerts.len();
    for alert in alerts {
        schedule_once(config.alert_dismiss_delay_ms, move || {
            // The alert may already be gone; that is logged and nothing more
            if let Err(e) = bootstrap::close_alert(&alert) {
                web_sys::console::warn_1(&format!("[Alerts] Could not dismiss alert: {}", e).into());
            }
        });
    }
    Ok(count)
}
