use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

mod pointer;

pub use pointer::{wire_input_handlers, InputWiring};

/// A subscribed DOM listener that unsubscribes on drop, so repeated mounts
/// never leak handlers. Holds its closure alive for the same span.
pub struct ListenerGuard {
    target: web::EventTarget,
    event: &'static str,
    callback: js_sys::Function,
    _closure: Box<dyn std::any::Any>,
}

impl ListenerGuard {
    pub fn listen<E>(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(E) + 'static,
    ) -> Self
    where
        E: FromWasmAbi + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
        let callback: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        _ = target.add_event_listener_with_callback(event, &callback);
        Self {
            target: target.clone(),
            event,
            callback,
            _closure: Box::new(closure),
        }
    }

    /// Listener taking no event argument (e.g. window resize).
    pub fn listen_unit(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut() + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let callback: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        _ = target.add_event_listener_with_callback(event, &callback);
        Self {
            target: target.clone(),
            event,
            callback,
            _closure: Box::new(closure),
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, &self.callback);
    }
}
