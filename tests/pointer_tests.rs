// Host-side tests for the pointer/hover tracker state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
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
}

use self::core::constants::HOVER_ACTIVITY_WINDOW;
use self::core::grid::GridCell;
use self::core::pointer::PointerTracker;

const RES: (f32, f32) = (1100.0, 550.0);
const PITCH: f32 = 11.0;

#[test]
fn enter_reports_the_first_cell() {
    let mut t = PointerTracker::new(20.0);
    let entered = t.enter((0.5, 0.5), RES, PITCH);
    assert!(t.hovered);
    assert_eq!(entered, Some(GridCell::new(25, 50)));
}

#[test]
fn moves_inside_one_cell_report_no_crossing() {
    let mut t = PointerTracker::new(20.0);
    t.enter((0.5, 0.5), RES, PITCH);
    // A few pixels of drift inside the same 11px cell
    let entered = t.moved((0.5 + 2.0 / RES.0, 0.5), RES, PITCH);
    assert_eq!(entered, None);
    assert!(t.active, "meaningful movement sets active");
}

#[test]
fn crossing_a_cell_boundary_reports_the_new_cell() {
    let mut t = PointerTracker::new(20.0);
    t.enter((0.5, 0.5), RES, PITCH);
    let entered = t.moved((0.5 + 22.0 / RES.0, 0.5), RES, PITCH);
    assert_eq!(entered, Some(GridCell::new(25, 52)));
}

#[test]
fn sub_pixel_jitter_does_not_flag_activity() {
    let mut t = PointerTracker::new(20.0);
    t.enter((0.5, 0.5), RES, PITCH);
    t.tick(HOVER_ACTIVITY_WINDOW + 0.01);
    assert!(!t.active);
    // a movement below the squared epsilon keeps active low
    t.moved((0.5 + 1e-5, 0.5), RES, PITCH);
    assert!(!t.active);
}

#[test]
fn activity_decays_while_hover_persists() {
    let mut t = PointerTracker::new(20.0);
    t.enter((0.3, 0.3), RES, PITCH);
    t.moved((0.35, 0.35), RES, PITCH);
    assert!(t.active);

    t.tick(HOVER_ACTIVITY_WINDOW / 2.0);
    assert!(t.active, "still inside the activity window");

    t.tick(HOVER_ACTIVITY_WINDOW);
    assert!(!t.active, "activity expired");
    assert!(t.hovered, "hover presence outlives activity");
}

#[test]
fn leave_then_enter_reregisters_the_same_cell() {
    let mut t = PointerTracker::new(20.0);
    t.enter((0.5, 0.5), RES, PITCH);
    assert_eq!(t.moved((0.5, 0.5), RES, PITCH), None);

    t.leave();
    assert!(!t.hovered);
    assert!(!t.active);
    assert_eq!(t.cell, None);
    assert_eq!(t.tilt_target, (0.0, 0.0));

    // Re-entering the exact same position must count as a cell change so
    // trails can spawn again.
    let entered = t.enter((0.5, 0.5), RES, PITCH);
    assert_eq!(entered, Some(GridCell::new(25, 50)));
}

#[test]
fn tilt_target_is_clamped_to_the_max_rotation() {
    let max = 20.0_f32.to_radians();
    let mut t = PointerTracker::new(20.0);
    t.enter((1.0, 1.0), RES, PITCH);
    assert!(t.tilt_target.0.abs() <= max + 1e-6);
    assert!(t.tilt_target.1.abs() <= max + 1e-6);
    // top-right corner tips the object away on both axes
    assert!(t.tilt_target.0 < 0.0);
    assert!(t.tilt_target.1 > 0.0);
}

#[test]
fn tilt_is_damped_toward_the_target_not_snapped() {
    let mut t = PointerTracker::new(20.0);
    t.enter((1.0, 0.5), RES, PITCH);
    let target = t.tilt_target;
    assert_eq!(t.tilt_current, (0.0, 0.0));

    t.tick(1.0 / 60.0);
    assert!(t.tilt_current.1 > 0.0, "moved toward the target");
    assert!(t.tilt_current.1 < target.1, "but not all the way");

    // The approach converges over many frames.
    for _ in 0..500 {
        t.tick(1.0 / 60.0);
    }
    assert!((t.tilt_current.1 - target.1).abs() < 1e-3);
}

#[test]
fn degenerate_resolution_reports_no_cell() {
    let mut t = PointerTracker::new(20.0);
    let entered = t.enter((0.5, 0.5), (0.0, 0.0), PITCH);
    assert_eq!(entered, None);
    assert!(t.hovered);
}
