use super::ListenerGuard;
use crate::dom;
use crate::input;
use crate::session::Session;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub session: Rc<RefCell<Session>>,
}

/// Subscribe the pointer and wheel handlers. The returned guards own the
/// subscriptions; dropping them (with the frame context on teardown) removes
/// every listener.
pub fn wire_input_handlers(w: InputWiring) -> Vec<ListenerGuard> {
    vec![
        wire_pointerenter(&w),
        wire_pointermove(&w),
        wire_pointerleave(&w),
        wire_pointerdown(&w),
        wire_pointerup(&w),
        wire_wheel(&w),
    ]
}

fn wire_pointerenter(w: &InputWiring) -> ListenerGuard {
    let w = w.clone();
    ListenerGuard::listen(
        &w.canvas.clone().into(),
        "pointerenter",
        move |ev: web::PointerEvent| {
            let uv = input::pointer_canvas_uv(&ev, &w.canvas);
            w.session.borrow_mut().pointer_entered(uv);
        },
    )
}

fn wire_pointermove(w: &InputWiring) -> ListenerGuard {
    let w = w.clone();
    ListenerGuard::listen(
        &w.canvas.clone().into(),
        "pointermove",
        move |ev: web::PointerEvent| {
            let uv = input::pointer_canvas_uv(&ev, &w.canvas);
            w.session.borrow_mut().pointer_moved(uv);
        },
    )
}

fn wire_pointerleave(w: &InputWiring) -> ListenerGuard {
    let w = w.clone();
    ListenerGuard::listen(
        &w.canvas.clone().into(),
        "pointerleave",
        move |_ev: web::PointerEvent| {
            w.session.borrow_mut().pointer_left();
            dom::set_touch_action(&w.canvas, "pan-y pinch-zoom");
        },
    )
}

fn wire_pointerdown(w: &InputWiring) -> ListenerGuard {
    let w = w.clone();
    ListenerGuard::listen(
        &w.canvas.clone().into(),
        "pointerdown",
        move |ev: web::PointerEvent| {
            let uv = input::pointer_canvas_uv(&ev, &w.canvas);
            let hit = w.session.borrow_mut().pointer_pressed(uv);
            // Scrolling stays live unless the press landed on the object.
            dom::set_touch_action(&w.canvas, if hit { "none" } else { "pan-y pinch-zoom" });
            _ = w.canvas.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        },
    )
}

fn wire_pointerup(w: &InputWiring) -> ListenerGuard {
    let w = w.clone();
    ListenerGuard::listen(
        &w.canvas.clone().into(),
        "pointerup",
        move |ev: web::PointerEvent| {
            w.session.borrow_mut().pointer_released();
            dom::set_touch_action(&w.canvas, "pan-y pinch-zoom");
            ev.prevent_default();
        },
    )
}

fn wire_wheel(w: &InputWiring) -> ListenerGuard {
    let w = w.clone();
    ListenerGuard::listen(
        &w.canvas.clone().into(),
        "wheel",
        move |ev: web::WheelEvent| {
            if w.session.borrow_mut().wheel(ev.delta_y() as f32) {
                ev.prevent_default();
            }
        },
    )
}
