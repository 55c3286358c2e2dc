#![cfg(target_arch = "wasm32")]
use crate::config::SessionConfig;
use crate::constants::CANVAS_ID;
use crate::session::Session;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod config;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod model;
mod overlay;
mod render;
mod session;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) -> Option<events::ListenerGuard> {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let window = web::window()?;
    Some(events::ListenerGuard::listen_unit(
        window.as_ref(),
        "resize",
        move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        },
    ))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pixelgrid-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    overlay::set_status(&document, "initializing");

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let config = SessionConfig::from_canvas(&canvas);
    log::info!(
        "[session] variant={:?} block={} gap={} radius={} lifetime={}",
        config.variant,
        config.block_size,
        config.gap_size,
        config.hover_radius,
        config.trail_lifetime
    );

    let mut guards = Vec::new();
    if let Some(g) = wire_canvas_resize(&canvas) {
        guards.push(g);
    }

    let session = Rc::new(RefCell::new(Session::new(config, rand::random())));
    {
        let mut s = session.borrow_mut();
        s.set_resolution(canvas.width() as f32, canvas.height() as f32);
    }

    let gpu = match frame::init_gpu(&canvas).await {
        Some(g) => g,
        None => {
            overlay::set_status(&document, "webgpu unavailable");
            return Err(anyhow::anyhow!("WebGPU unavailable"));
        }
    };
    // The procedural scene exists as soon as the pipelines do; this arms the
    // reveal sequencer with the projected model bounds.
    session.borrow_mut().model_ready();

    guards.extend(events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        session: session.clone(),
    }));

    let halted = Rc::new(RefCell::new(false));
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session: session.clone(),
        canvas: canvas.clone(),
        gpu: Some(gpu),
        guards,
        halted: halted.clone(),
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    overlay::set_status(&document, "ready");
    overlay::hide_status(&document);
    Ok(())
}
