// Host-side tests for the trail path generator and pool.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod grid {
        include!("../src/core/grid.rs");
    }
    pub mod trail {
        include!("../src/core/trail.rs");
    }
}

use self::core::constants::{TRAIL_FADE_FLOOR, TRAIL_MAX_SEGMENTS, TRAIL_MIN_SEGMENTS};
use self::core::grid::GridCell;
use self::core::trail::*;
use rand::prelude::*;

#[test]
fn generated_paths_stay_inside_the_grid() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let origin = GridCell::new(rng.gen_range(0..40), rng.gen_range(0..60));
        let path = generate_path(&mut rng, origin, 40, 60);
        for cell in &path {
            assert!((0..40).contains(&cell.row), "row {} out of bounds", cell.row);
            assert!((0..60).contains(&cell.col), "col {} out of bounds", cell.col);
        }
    }
}

#[test]
fn path_length_is_two_or_three_on_a_large_board() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..500 {
        let path = generate_path(&mut rng, GridCell::new(50, 50), 100, 100);
        assert!(path.len() >= TRAIL_MIN_SEGMENTS as usize);
        assert!(path.len() <= TRAIL_MAX_SEGMENTS as usize);
    }
}

#[test]
fn path_terminates_early_when_no_move_fits() {
    // Every knight-like move leaves a 1x1 board; an empty path is expected.
    let mut rng = StdRng::seed_from_u64(13);
    let path = generate_path(&mut rng, GridCell::new(0, 0), 1, 1);
    assert!(path.is_empty());
}

#[test]
fn segment_duration_matches_lifetime_and_slowdown() {
    // lifetime 2, slowdown 2, 3 segments -> 4/3 s per segment
    let d = segment_duration(2.0, 3);
    assert!((d - 4.0 / 3.0).abs() < 1e-6);
    // empty path never divides by zero
    assert!(segment_duration(2.0, 0).is_finite());
}

#[test]
fn pool_never_exceeds_capacity() {
    let mut pool = TrailPool::new(16, 4.0, 3);
    for row in 0..30 {
        for col in 0..30 {
            pool.trigger(GridCell::new(row, col), 64, 64);
        }
    }
    assert!(pool.len() <= 16);
}

#[test]
fn overflow_evicts_the_back_and_inserts_at_the_front() {
    let mut pool = TrailPool::new(4, 4.0, 5);
    for col in 0..4 {
        pool.trigger(GridCell::new(0, col), 64, 64);
    }
    // entries are pushed to the front, so the back is the first insertion
    assert_eq!(pool.entries().last().unwrap().origin, GridCell::new(0, 0));

    pool.trigger(GridCell::new(1, 0), 64, 64);
    assert_eq!(pool.len(), 4);
    assert_eq!(pool.entries()[0].origin, GridCell::new(1, 0));
    assert!(pool.entries().iter().all(|e| e.origin != GridCell::new(0, 0)));
}

#[test]
fn respawn_refreshes_in_place_instead_of_duplicating() {
    let mut pool = TrailPool::new(8, 4.0, 9);
    let origin = GridCell::new(3, 3);
    pool.trigger(origin, 64, 64);
    pool.advance(1.0);
    assert!(pool.entries()[0].age > 0.0);

    pool.trigger(origin, 64, 64);
    assert_eq!(pool.len(), 1);
    let entry = pool
        .entries()
        .iter()
        .find(|e| e.origin == origin)
        .expect("refreshed entry still present");
    assert_eq!(entry.age, 0.0);
    assert_eq!(entry.segment_index, 0);
}

#[test]
fn entities_expire_just_past_their_lifetime() {
    let lifetime = 2.0;
    let mut pool = TrailPool::new(8, lifetime, 21);
    pool.trigger(GridCell::new(10, 10), 64, 64);

    let mut elapsed = 0.0;
    while elapsed < lifetime - 0.05 {
        pool.advance(0.05);
        elapsed += 0.05;
    }
    assert_eq!(pool.len(), 1, "present just before lifetime");

    pool.advance(0.05 + TRAIL_FADE_FLOOR + 1e-4);
    assert!(pool.is_empty(), "absent past lifetime + fade floor");
}

#[test]
fn playback_interpolates_continuously_between_waypoints() {
    let mut pool = TrailPool::new(8, 1.0, 33);
    let origin = GridCell::new(20, 20);
    pool.trigger(origin, 64, 64);
    let (path, duration) = {
        let e = &pool.entries()[0];
        (e.path.clone(), e.segment_duration)
    };
    assert!(!path.is_empty());

    // Halfway through segment 0: midpoint between origin and waypoint 0.
    pool.advance(duration * 0.5);
    let mid = pool.entries()[0].current;
    let expect = (
        (origin.row as f32 + path[0].row as f32) * 0.5,
        (origin.col as f32 + path[0].col as f32) * 0.5,
    );
    assert!((mid.0 - expect.0).abs() < 1e-4);
    assert!((mid.1 - expect.1).abs() < 1e-4);

    // Completing segment 0 lands exactly on waypoint 0, which is also where
    // segment 1 starts.
    pool.advance(duration * 0.5);
    let at_boundary = pool.entries()[0].current;
    assert!((at_boundary.0 - path[0].row as f32).abs() < 1e-4);
    assert!((at_boundary.1 - path[0].col as f32).abs() < 1e-4);
}

#[test]
fn spawn_neighbors_only_touches_adjacent_cells() {
    let mut pool = TrailPool::new(128, 4.0, 41);
    pool.spawn_neighbors(GridCell::new(5, 5), 64, 64);
    assert!(pool.len() <= 8);
    for e in pool.entries() {
        assert!((e.origin.row - 5).abs() <= 1);
        assert!((e.origin.col - 5).abs() <= 1);
        assert!(e.origin != GridCell::new(5, 5));
    }
}

#[test]
fn spawn_neighbors_respects_grid_bounds() {
    let mut pool = TrailPool::new(128, 4.0, 43);
    // Corner cell: only 3 of the 8 neighbors are in bounds.
    for _ in 0..20 {
        pool.spawn_neighbors(GridCell::new(0, 0), 8, 8);
    }
    for e in pool.entries() {
        assert!(e.origin.row >= 0 && e.origin.col >= 0);
    }
    assert!(pool.len() <= 3);
}
