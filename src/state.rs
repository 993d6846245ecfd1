//! View State
//!
//! Presentation state of a page and the pure rules that move it.
//! DOM mutation lives in the binding modules; nothing here touches the page.

use leptos::prelude::*;

/// Per-page view state shared by the sidebar handlers
#[derive(Clone, Copy)]
pub struct ViewState {
    pub sidebar_shown: RwSignal<bool>,
}

impl ViewState {
    pub fn new(sidebar_shown: bool) -> Self {
        Self {
            sidebar_shown: RwSignal::new(sidebar_shown),
        }
    }

    /// Apply a toggle click to the visibility currently on the page
    pub fn toggle_sidebar(&self, dom_shown: bool) -> bool {
        self.sidebar_shown.set(after_toggle(dom_shown));
        self.sidebar_shown.get_untracked()
    }

    /// Apply a document click to the visibility currently on the page
    pub fn document_click(&self, dom_shown: bool, click: DocumentClick, breakpoint_px: f64) -> bool {
        self.sidebar_shown
            .set(after_document_click(dom_shown, click, breakpoint_px));
        self.sidebar_shown.get_untracked()
    }
}

/// A click anywhere in the document, as the sidebar sees it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DocumentClick {
    pub viewport_width: f64,
    /// Target lies inside the sidebar or its toggle control
    pub inside: bool,
}

pub fn after_toggle(shown: bool) -> bool {
    !shown
}

/// Outside clicks collapse the sidebar on narrow viewports only
pub fn after_document_click(shown: bool, click: DocumentClick, breakpoint_px: f64) -> bool {
    if click.viewport_width < breakpoint_px && !click.inside {
        false
    } else {
        shown
    }
}

/// Visual state of a completion button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionState {
    Incomplete,
    Complete,
}

impl CompletionState {
    pub fn from_completed(completed: bool) -> Self {
        if completed {
            CompletionState::Complete
        } else {
            CompletionState::Incomplete
        }
    }

    /// State the page was rendered with, read from the button's classes
    pub fn from_class_name(class_name: &str) -> Self {
        let solid = class_name.split_whitespace().any(|c| c == Self::Complete.class());
        Self::from_completed(solid)
    }

    /// Style class the button carries in this state
    pub fn class(self) -> &'static str {
        match self {
            CompletionState::Complete => "btn-success",
            CompletionState::Incomplete => "btn-outline-success",
        }
    }

    /// Style class of the opposite state, removed when entering this one
    pub fn stale_class(self) -> &'static str {
        match self {
            CompletionState::Complete => CompletionState::Incomplete.class(),
            CompletionState::Incomplete => CompletionState::Complete.class(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CompletionState::Complete => "Completed",
            CompletionState::Incomplete => "Mark as Complete",
        }
    }

    /// Button content: check icon followed by the label
    pub fn button_html(self) -> String {
        format!(r#"<i class="fas fa-check me-2"></i>{}"#, self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BREAKPOINT: f64 = 992.0;

    fn click(viewport_width: f64, inside: bool) -> DocumentClick {
        DocumentClick { viewport_width, inside }
    }

    #[test]
    fn test_toggle_inverts() {
        assert!(after_toggle(false));
        assert!(!after_toggle(true));
        assert!(after_toggle(after_toggle(true)));
    }

    #[test]
    fn test_outside_click_wide_viewport_keeps_sidebar() {
        for width in [992.0, 993.0, 1280.0, 1920.0] {
            assert!(after_document_click(true, click(width, false), BREAKPOINT), "width {}", width);
        }
    }

    #[test]
    fn test_outside_click_narrow_viewport_collapses() {
        for width in [320.0, 768.0, 991.0, 991.5] {
            assert!(!after_document_click(true, click(width, false), BREAKPOINT), "width {}", width);
            // Already hidden stays hidden
            assert!(!after_document_click(false, click(width, false), BREAKPOINT));
        }
    }

    #[test]
    fn test_inside_click_never_collapses() {
        assert!(after_document_click(true, click(500.0, true), BREAKPOINT));
        assert!(after_document_click(true, click(1200.0, true), BREAKPOINT));
        assert!(!after_document_click(false, click(500.0, true), BREAKPOINT));
    }

    #[test]
    fn test_view_state_signal() {
        let state = ViewState::new(false);
        assert!(state.toggle_sidebar(false));
        assert!(!state.document_click(true, click(600.0, false), BREAKPOINT));
        assert!(state.toggle_sidebar(false));
        assert!(state.document_click(true, click(1400.0, false), BREAKPOINT));
    }

    #[test]
    fn test_view_state_follows_page_class() {
        // Something else showed the sidebar after bind time
        let state = ViewState::new(false);
        assert!(!state.toggle_sidebar(true));
        assert!(!state.sidebar_shown.get_untracked());

        // Outside click on a narrow viewport collapses whatever the page shows
        let state = ViewState::new(false);
        assert!(!state.document_click(true, click(700.0, false), BREAKPOINT));

        let state = ViewState::new(true);
        assert!(state.toggle_sidebar(false));
    }

    #[test]
    fn test_completion_classes_and_labels() {
        let done = CompletionState::from_completed(true);
        assert_eq!(done, CompletionState::Complete);
        assert_eq!(done.class(), "btn-success");
        assert_eq!(done.stale_class(), "btn-outline-success");
        assert_eq!(done.label(), "Completed");

        let todo = CompletionState::from_completed(false);
        assert_eq!(todo.class(), "btn-outline-success");
        assert_eq!(todo.stale_class(), "btn-success");
        assert_eq!(todo.label(), "Mark as Complete");
        assert!(todo.button_html().ends_with("</i>Mark as Complete"));
    }

    #[test]
    fn test_rendered_state_from_classes() {
        assert_eq!(CompletionState::from_class_name("btn btn-success w-100"), CompletionState::Complete);
        assert_eq!(CompletionState::from_class_name("btn btn-outline-success"), CompletionState::Incomplete);
        assert_eq!(CompletionState::from_class_name(""), CompletionState::Incomplete);
    }
}
