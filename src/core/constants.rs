// Shared tuning constants for the hover-trail simulation and reveal sequence.

// Trail pool
pub const TRAIL_CAPACITY: usize = 128; // fixed uniform-array size, shader is built against it
pub const TRAIL_MIN_SEGMENTS: u32 = 2; // shortest requested random walk
pub const TRAIL_MAX_SEGMENTS: u32 = 3; // longest requested random walk
pub const TRAIL_NEIGHBOR_PROBABILITY: f32 = 0.5; // per-neighbor spawn roll on cell entry
pub const TRAIL_SPEED_SLOWDOWN: f32 = 2.0; // stretches segment playback relative to lifetime
pub const TRAIL_FADE_FLOOR: f32 = 1e-3; // grace period past lifetime before removal

// Knight-like step set for trail walks
pub const TRAIL_MOVES: [(i32, i32); 12] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
    (0, 2),
    (0, -2),
    (2, 0),
    (-2, 0),
];

// Pointer tracking
pub const HOVER_ACTIVITY_WINDOW: f32 = 0.15; // seconds of stillness before `active` drops
pub const HOVER_MOVE_EPSILON_SQ: f32 = 1e-6; // squared normalized distance counted as movement
pub const HOVER_ANGLE_EPSILON_SQ: f32 = 1e-9; // below this the movement angle is kept as-is
pub const ROTATION_DAMPING: f32 = 0.06; // per-frame approach factor toward the tilt target

// Reveal sequence
pub const FILL_PHASE_COUNT: usize = 5;
pub const FILL_PHASE_OVERLAP: f32 = 0.7; // next phase starts when the previous is this far in
pub const FILL_PHASE_DURATION: f32 = 0.75; // seconds per phase unit
pub const FILL_COLUMNS: usize = 12;
// Relative tower heights across the projected model width, left to right
pub const FILL_COLUMN_HEIGHTS: [f32; FILL_COLUMNS] = [
    3.0, 2.0, 3.0, 4.0, 5.0, 10.0, 15.0, 8.0, 5.0, 4.0, 3.5, 3.0,
];
pub const FILL_GRID_LINE_START: f32 = 0.3; // progress where the horizontal white line appears
pub const FILL_GRID_SETTLE_MARGIN: f32 = 0.5; // progress before the end where gridlines settle

// Guards applied at the configuration boundary
pub const MIN_PITCH: f32 = 1.0; // cell pitch never drops below one pixel
pub const MIN_LIFETIME: f32 = 1e-3;
