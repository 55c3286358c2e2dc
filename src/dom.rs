use crate::constants::DPR_CAP;
use web_sys as web;

/// Keep the canvas backing store at CSS size times the device pixel ratio,
/// capped so high-DPI screens do not quadruple the fragment workload.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(DPR_CAP);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Toggle touch scrolling while the pointer holds the object.
pub fn set_touch_action(canvas: &web::HtmlCanvasElement, value: &str) {
    _ = canvas.style().set_property("touch-action", value);
}
