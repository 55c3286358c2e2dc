use web_sys as web;

/// Normalized pointer position with y flipped bottom-up, the frame the whole
/// simulation and both shaders work in.
#[inline]
pub fn pointer_canvas_uv(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w <= 0.0 || h <= 0.0 {
        return (0.5, 0.5);
    }
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    ((x_css / w).clamp(0.0, 1.0), (1.0 - y_css / h).clamp(0.0, 1.0))
}
