//! Course Portal Page Behaviour
//!
//! Enhances the server-rendered portal pages once their content is ready.

mod alerts;
mod bootstrap;
mod completion;
mod config;
mod confirm;
mod error;
mod init;
mod sidebar;
mod state;
mod tooltips;

use wasm_bindgen::prelude::*;

pub use completion::mark_video_complete;
pub use config::PageConfig;
pub use error::UiError;
pub use state::{CompletionState, ViewState};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = page_events::on_content_ready(init::init_page) {
        web_sys::console::error_1(&format!("[Init] Could not wait for content: {}", UiError::from(e)).into());
    }
}
