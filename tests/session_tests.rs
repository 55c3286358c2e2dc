// Host-side tests for the per-mount session, covering the fill-bounds
// projection across resizes. The modules are included at the test-crate root
// so their `crate::` paths resolve without the wasm-only surface.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod camera {
    include!("../src/camera.rs");
}
mod model {
    include!("../src/model.rs");
}
mod config {
    include!("../src/config.rs");
}
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod grid {
        include!("../src/core/grid.rs");
    }
    pub mod pointer {
        include!("../src/core/pointer.rs");
    }
    pub mod reveal {
        include!("../src/core/reveal.rs");
    }
    pub mod trail {
        include!("../src/core/trail.rs");
    }
    pub mod uniforms {
        include!("../src/core/uniforms.rs");
    }
    pub use self::constants::*;
    pub use self::grid::*;
    pub use self::pointer::*;
    pub use self::reveal::*;
    pub use self::trail::*;
    pub use self::uniforms::*;
}
mod session {
    include!("../src/session.rs");
}

use self::camera::OrthoCamera;
use self::config::SessionConfig;
use self::constants::Variant;
use self::model::ModelStandIn;
use self::session::Session;

fn coin_session(width: f32, height: f32) -> Session {
    let mut s = Session::new(SessionConfig::default(), 7);
    s.set_resolution(width, height);
    s.model_ready();
    s
}

#[test]
fn resize_reprojects_fill_bounds_while_reveal_runs() {
    let mut s = coin_session(1100.0, 550.0);
    let wide = s.grid_uniforms();

    s.set_resolution(550.0, 550.0);
    let square = s.grid_uniforms();

    // The x extent depends on the aspect; a square canvas projects the coin
    // footprint wider than a 2:1 one.
    assert!((wide.fill_x_min - square.fill_x_min).abs() > 0.05);
    assert!((wide.fill_x_max - square.fill_x_max).abs() > 0.05);
    // The y extent only depends on the camera extent.
    assert!((wide.fill_y_min - square.fill_y_min).abs() < 1e-4);
    assert!((wide.fill_y_max - square.fill_y_max).abs() < 1e-4);
}

#[test]
fn reprojected_bounds_match_a_fresh_projection() {
    let mut s = coin_session(1100.0, 550.0);
    s.set_resolution(550.0, 550.0);
    let uni = s.grid_uniforms();

    let model = ModelStandIn::new(Variant::Coin);
    let cam = OrthoCamera::new(Variant::Coin.world_extent());
    let (y_min, y_max, x_min, x_max) = model.project_bounds(&cam, 1.0);
    assert!((uni.fill_y_min - y_min).abs() < 1e-4);
    assert!((uni.fill_y_max - y_max).abs() < 1e-4);
    assert!((uni.fill_x_min - x_min).abs() < 1e-4);
    assert!((uni.fill_x_max - x_max).abs() < 1e-4);
}

#[test]
fn completed_reveal_keeps_its_bounds_on_resize() {
    let mut s = coin_session(1100.0, 550.0);
    // Two large steps drive the sequencer past its span.
    s.tick(2.0);
    s.tick(2.0);
    let done = s.grid_uniforms();
    assert!(done.fill_progress >= done.fill_span - 1e-4);

    s.set_resolution(550.0, 550.0);
    let after = s.grid_uniforms();
    assert!((done.fill_x_min - after.fill_x_min).abs() < 1e-6);
    assert!((done.fill_x_max - after.fill_x_max).abs() < 1e-6);
}

#[test]
fn repeated_resolution_is_a_no_op() {
    let mut s = coin_session(1100.0, 550.0);
    let before = s.grid_uniforms();
    s.set_resolution(1100.0, 550.0);
    let after = s.grid_uniforms();
    assert!((before.fill_x_min - after.fill_x_min).abs() < 1e-6);
    assert!((before.fill_y_max - after.fill_y_max).abs() < 1e-6);
}
