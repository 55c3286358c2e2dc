// Host-side tests for the uniform bridge and grid shader template.
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
    pub mod uniforms {
        include!("../src/core/uniforms.rs");
    }
}

use self::core::constants::TRAIL_CAPACITY;
use self::core::grid::GridCell;
use self::core::trail::TrailPool;
use self::core::uniforms::*;

#[test]
fn unused_slots_are_padded_with_the_sentinel() {
    let mut pool = TrailPool::new(TRAIL_CAPACITY, 4.0, 17);
    pool.trigger(GridCell::new(2, 3), 64, 64);
    pool.trigger(GridCell::new(5, 7), 64, 64);

    let mut slots = [[0.0_f32; 4]; TRAIL_CAPACITY];
    let count = write_trail_slots(&mut slots, &pool);
    assert_eq!(count, 2);

    for slot in &slots[count as usize..] {
        assert_eq!(*slot, TRAIL_SLOT_SENTINEL);
        assert_eq!(slot[0], -10.0);
        assert_eq!(slot[1], -10.0);
        assert_eq!(slot[2], 1.0);
    }
}

#[test]
fn active_slots_carry_position_and_normalized_age() {
    let mut pool = TrailPool::new(TRAIL_CAPACITY, 2.0, 19);
    pool.trigger(GridCell::new(4, 9), 64, 64);
    pool.advance(1.0);

    let mut slots = [[0.0_f32; 4]; TRAIL_CAPACITY];
    let count = write_trail_slots(&mut slots, &pool);
    assert_eq!(count, 1);

    let entry = &pool.entries()[0];
    // slot layout is (col, row, age)
    assert_eq!(slots[0][0], entry.current.1);
    assert_eq!(slots[0][1], entry.current.0);
    assert!((slots[0][2] - 0.5).abs() < 1e-6, "age 1s of lifetime 2s");
}

#[test]
fn stale_data_is_overwritten_after_expiry() {
    let mut pool = TrailPool::new(TRAIL_CAPACITY, 0.5, 23);
    pool.trigger(GridCell::new(1, 1), 64, 64);

    let mut slots = [[0.0_f32; 4]; TRAIL_CAPACITY];
    assert_eq!(write_trail_slots(&mut slots, &pool), 1);

    // Entity expires; its old slot must not survive the next bridge write.
    pool.advance(1.0);
    assert!(pool.is_empty());
    assert_eq!(write_trail_slots(&mut slots, &pool), 0);
    assert_eq!(slots[0], TRAIL_SLOT_SENTINEL);
}

#[test]
fn shader_template_is_instantiated_once_with_the_capacity() {
    let template = include_str!("../shaders/grid.wgsl");
    let source = grid_shader_source(template, TRAIL_CAPACITY);
    assert!(source.contains(&format!("const TRAIL_CAPACITY: u32 = {}u;", TRAIL_CAPACITY)));
    assert!(source.contains("array<vec4<f32>, TRAIL_CAPACITY>"));
    assert!(!source.contains("{{"), "no placeholder survives templating");
}

#[test]
fn uniform_struct_matches_the_wgsl_layout() {
    // 20-float header, then the 16-byte trail slots; any drift here skews
    // every field the shader reads after the mismatch.
    assert_eq!(
        std::mem::size_of::<GridUniforms>(),
        80 + 16 * TRAIL_CAPACITY
    );
    assert_eq!(std::mem::align_of::<GridUniforms>(), 4);
}
