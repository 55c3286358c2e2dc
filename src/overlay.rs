use crate::constants::STATUS_ID;
use web_sys as web;

/// Short user-visible load status, written to the page's status element when
/// one exists ("initializing", "webgpu unavailable", "ready").
pub fn set_status(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(STATUS_ID) {
        _ = el.class_list().remove_1("hidden");
        el.set_inner_html(text);
    }
}

/// Hide the status line once the page is interactive.
pub fn hide_status(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(STATUS_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback for environments without the CSS class
        _ = el.set_attribute("style", "display:none");
    }
}
