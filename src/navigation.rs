use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

use crate::config::HASH_REMOVAL_DELAY_MS;

/// Smoothly scrolls `element_id` into view. With `remove_hash`, the fragment
/// is dropped from the address bar once the scroll has started.
pub fn smooth_scroll_to(element_id: &str, remove_hash: bool) {
    let Some(window) = web_sys::window() else { return };
    let Some(element) = window.document().and_then(|d| d.get_element_by_id(element_id)) else {
        log::debug!("No element #{} to scroll to", element_id);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);

    if remove_hash {
        Timeout::new(HASH_REMOVAL_DELAY_MS, move || {
            let Some(window) = web_sys::window() else { return };
            let path = window.location().pathname().unwrap_or_default();
            if let Ok(history) = window.history() {
                if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(&path)) {
                    log::warn!("Could not drop hash from url: {:?}", err);
                }
            }
        })
        .forget();
    }
}

/// Click handler body for in-page anchors. Links that are not `#fragment`
/// keep their default behavior.
pub fn handle_anchor_click(event: &MouseEvent, href: &str, remove_hash: bool) {
    if let Some(id) = href.strip_prefix('#') {
        event.prevent_default();
        smooth_scroll_to(id, remove_hash);
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
