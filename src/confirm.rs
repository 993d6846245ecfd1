//! Confirmation-Guarded Forms
//!
//! Forms declare their prompt with `data-confirm="..."`. Forms still using an
//! inline `onsubmit="return confirm('...')"` are migrated once at bind time:
//! the message moves to `data-confirm` and the inline handler is removed, so
//! the user is asked exactly once. Inline handlers doing anything more than
//! that single call are left in place.

use std::sync::OnceLock;

use regex::Regex;

use page_events::{bind_listener, query_all};

use crate::error::UiError;

pub const CONFIRM_ATTRIBUTE: &str = "data-confirm";
const INLINE_ATTRIBUTE: &str = "onsubmit";
const GUARDED_FORMS: &str = r#"form[data-confirm], form[onsubmit*="confirm"]"#;

fn inline_confirm_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"confirm\('([^']+)'\)").expect("inline confirm regex"))
}

/// Inline handler that is nothing but `[return ]confirm('...')[;]`
fn bare_inline_confirm_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(?:return\s+)?confirm\('[^']+'\)\s*;?\s*$").expect("bare inline confirm regex")
    })
}

/// Message passed to `confirm('...')` in an inline handler, if well formed
pub fn extract_inline_message(inline: &str) -> Option<String> {
    inline_confirm_pattern()
        .captures(inline)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Prompt text for a form; the declarative attribute wins over the inline one
pub fn guard_message(declared: Option<&str>, inline: Option<&str>) -> Option<String> {
    match declared.map(str::trim).filter(|m| !m.is_empty()) {
        Some(message) => Some(message.to_string()),
        None => inline.and_then(extract_inline_message),
    }
}

/// How a form gets guarded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmGuard {
    pub message: String,
    /// Inline handler only repeats the prompt and can be removed
    pub strip_inline: bool,
}

/// Decide the guard for a form, or `None` when there is no usable message
pub fn plan_guard(declared: Option<&str>, inline: Option<&str>) -> Option<ConfirmGuard> {
    let message = guard_message(declared, inline)?;
    let from_inline = declared.map(str::trim).filter(|m| !m.is_empty()).is_none();
    let strip_inline = from_inline && inline.is_some_and(|i| bare_inline_confirm_pattern().is_match(i));
    Some(ConfirmGuard { message, strip_inline })
}

/// Whether the submission must be cancelled. No message never blocks.
pub fn should_block<F>(message: Option<&str>, ask: F) -> bool
where
    F: FnOnce(&str) -> bool,
{
    match message {
        Some(message) => !ask(message),
        None => false,
    }
}

/// Guard every matching form; returns how many got a guard
pub fn bind(doc: &web_sys::Document) -> Result<usize, UiError> {
    let mut guarded = 0;
    for form in query_all(doc, GUARDED_FORMS)? {
        let inline = form.get_attribute(INLINE_ATTRIBUTE);
        let guard = plan_guard(form.get_attribute(CONFIRM_ATTRIBUTE).as_deref(), inline.as_deref());

        let Some(ConfirmGuard { message, strip_inline }) = guard else {
            // Malformed: leave the form exactly as rendered
            continue;
        };

        if strip_inline {
            form.set_attribute(CONFIRM_ATTRIBUTE, &message)?;
            form.remove_attribute(INLINE_ATTRIBUTE)?;
        }

        bind_listener(&form, "submit", move |ev| {
            let blocked = should_block(Some(message.as_str()), ask);
            if blocked {
                ev.prevent_default();
            }
        })?;
        guarded += 1;
    }
    Ok(guarded)
}

/// Native confirm prompt. If it cannot be shown, the submission goes ahead.
fn ask(message: &str) -> bool {
    let Some(win) = web_sys::window() else { return true };
    win.confirm_with_message(message).unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("[Confirm] Prompt failed: {}", UiError::from(e)).into());
        true
    })
}
