//! Sidebar Toggle
//!
//! Toggle control flips the shown class; outside clicks collapse the
//! sidebar on narrow viewports.

use page_events::{bind_document_listener, bind_listener, event_within};

use crate::config::PageConfig;
use crate::error::UiError;
use crate::state::{DocumentClick, ViewState};

/// Install both handlers. Missing elements mean no handlers, not an error.
pub fn bind(doc: &web_sys::Document, config: &PageConfig) -> Result<(), UiError> {
    let (Some(toggle), Some(sidebar)) = (
        doc.get_element_by_id(&config.sidebar_toggle_id),
        doc.get_element_by_id(&config.sidebar_id),
    ) else {
        return Ok(());
    };

    let shown_class = config.sidebar_shown_class.clone();
    let state = ViewState::new(sidebar.class_list().contains(&shown_class));

    {
        let sidebar = sidebar.clone();
        let shown_class = shown_class.clone();
        bind_listener(&toggle, "click", move |_ev| {
            let shown = state.toggle_sidebar(sidebar.class_list().contains(&shown_class));
            render(&sidebar, &shown_class, shown);
        })?;
    }

    let breakpoint = config.sidebar_breakpoint_px;
    bind_document_listener("click", move |ev| {
        let Some(viewport_width) = viewport_width() else { return };
        let target = ev.target();
        let click = DocumentClick {
            viewport_width,
            inside: event_within(target.as_ref(), &sidebar) || event_within(target.as_ref(), &toggle),
        };
        let dom_shown = sidebar.class_list().contains(&shown_class);
        let shown = state.document_click(dom_shown, click, breakpoint);
        render(&sidebar, &shown_class, shown);
    })?;

    Ok(())
}

fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

fn render(sidebar: &web_sys::Element, shown_class: &str, shown: bool) {
    let classes = sidebar.class_list();
    let result = if shown {
        classes.add_1(shown_class)
    } else {
        classes.remove_1(shown_class)
    };
    if let Err(e) = result {
        web_sys::console::error_1(&format!("[Sidebar] Failed to update class: {}", UiError::from(e)).into());
    }
}
