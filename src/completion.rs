//! Mark Video Complete
//!
//! Posts the completion form in the background and switches the completion
//! button to whatever state the server reports.

use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::config::PageConfig;
use crate::error::UiError;
use crate::state::CompletionState;

/// Attribute tying a completion form to its video
pub const VIDEO_ID_ATTRIBUTE: &str = "data-video-id";

/// Server reply. Missing or null fields read as false, so unknown shapes change nothing.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompletionReply {
    pub success: Option<bool>,
    pub completed: Option<bool>,
}

impl CompletionReply {
    /// State to show, or `None` when the server did not confirm the change
    pub fn outcome(&self) -> Option<CompletionState> {
        self.success
            .unwrap_or(false)
            .then(|| CompletionState::from_completed(self.completed.unwrap_or(false)))
    }
}

/// Selector for the form of one particular video
pub fn form_selector_for(base: &str, video_id: u32) -> String {
    format!(r#"{}[{}="{}"]"#, base, VIDEO_ID_ATTRIBUTE, video_id)
}

/// Submit the completion form of `video_id` without leaving the page.
///
/// Falls back to the first completion form when no form is tagged with the id.
/// Does nothing when the page has no completion form.
#[wasm_bindgen(js_name = markVideoComplete)]
pub fn mark_video_complete(video_id: Option<u32>) {
    let Ok(doc) = page_events::document() else { return };
    let config = PageConfig::from_document(&doc);
    let Some(form) = find_form(&doc, &config.completion_form_selector, video_id) else {
        return;
    };

    wasm_bindgen_futures::spawn_local(async move {
        match submit(&form).await {
            Ok(Some((before, after))) => {
                web_sys::console::log_1(
                    &format!("[Completion] Video {:?}: {:?} -> {:?}", video_id, before, after).into(),
                );
            }
            Ok(None) => {
                web_sys::console::log_1(&"[Completion] Server did not confirm, button unchanged".into());
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[Completion] Error: {}", e).into());
            }
        }
    });
}

fn find_form(doc: &web_sys::Document, base: &str, video_id: Option<u32>) -> Option<web_sys::HtmlFormElement> {
    let tagged = video_id.and_then(|id| doc.query_selector(&form_selector_for(base, id)).ok().flatten());
    let el = match tagged {
        Some(el) => el,
        None => doc.query_selector(base).ok().flatten()?,
    };
    el.dyn_into::<web_sys::HtmlFormElement>().ok()
}

/// Returns the button's state before and after, when the server confirmed a change
async fn submit(
    form: &web_sys::HtmlFormElement,
) -> Result<Option<(CompletionState, CompletionState)>, UiError> {
    let win = web_sys::window().ok_or_else(|| UiError::Missing("window".to_string()))?;

    let fields = web_sys::FormData::new_with_form(form)?;
    let body = web_sys::UrlSearchParams::new_with_str_sequence_sequence(&fields)?;

    let headers = web_sys::Headers::new()?;
    headers.set("X-Requested-With", "XMLHttpRequest")?;
    headers.set("Content-Type", "application/x-www-form-urlencoded")?;

    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&body);
    let request = web_sys::Request::new_with_str_and_init(&form.action(), &init)?;

    let response: web_sys::Response = JsFuture::from(win.fetch_with_request(&request)).await?.dyn_into()?;
    let json = JsFuture::from(response.json()?).await?;
    let reply: CompletionReply = serde_wasm_bindgen::from_value(json)?;

    let Some(state) = reply.outcome() else {
        return Ok(None);
    };
    let button = form
        .query_selector("button")?
        .ok_or_else(|| UiError::Missing("completion button".to_string()))?;
    let before = CompletionState::from_class_name(&button.class_name());
    apply(&button, state)?;
    Ok(Some((before, state)))
}

fn apply(button: &web_sys::Element, state: CompletionState) -> Result<(), UiError> {
    let classes = button.class_list();
    classes.remove_1(state.stale_class())?;
    classes.add_1(state.class())?;
    button.set_inner_html(&state.button_html());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(raw: &str) -> CompletionReply {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_completed_reply() {
        let state = reply(r#"{"success": true, "completed": true}"#).outcome();
        assert_eq!(state, Some(CompletionState::Complete));
        assert_eq!(state.unwrap().label(), "Completed");
        assert_eq!(state.unwrap().class(), "btn-success");
    }

    #[test]
    fn test_uncompleted_reply() {
        let state = reply(r#"{"success": true, "completed": false}"#).outcome();
        assert_eq!(state, Some(CompletionState::Incomplete));
        assert_eq!(state.unwrap().label(), "Mark as Complete");
        assert_eq!(state.unwrap().class(), "btn-outline-success");
    }

    #[test]
    fn test_unsuccessful_reply_changes_nothing() {
        assert_eq!(reply(r#"{"success": false}"#).outcome(), None);
        assert_eq!(reply(r#"{"success": false, "completed": true}"#).outcome(), None);
        assert_eq!(reply(r#"{"error": "login required"}"#).outcome(), None);
        assert_eq!(reply("{}").outcome(), None);
    }

    #[test]
    fn test_success_without_completed_reads_incomplete() {
        assert_eq!(reply(r#"{"success": true}"#).outcome(), Some(CompletionState::Incomplete));
    }

    #[test]
    fn test_null_fields_read_as_false() {
        assert_eq!(
            reply(r#"{"success": true, "completed": null}"#).outcome(),
            Some(CompletionState::Incomplete)
        );
        assert_eq!(reply(r#"{"success": null, "completed": true}"#).outcome(), None);
    }

    #[test]
    fn test_malformed_reply_is_an_error() {
        assert!(serde_json::from_str::<CompletionReply>(r#"{"success": "yes"}"#).is_err());
        assert!(serde_json::from_str::<CompletionReply>("<html>").is_err());
    }

    #[test]
    fn test_form_selector_for() {
        assert_eq!(
            form_selector_for(".mark-complete-form", 42),
            r#".mark-complete-form[data-video-id="42"]"#
        );
    }
}
