/// Page-level constants and the variant table.
///
/// Simulation tuning lives in `core::constants`; this file covers the DOM
/// surface, camera extents and per-variant defaults.

// DOM ids the page layer provides
pub const CANVAS_ID: &str = "page-canvas";
pub const STATUS_ID: &str = "page-status";

// Backing-store scale cap; retina above 2x buys nothing at this cell size
pub const DPR_CAP: f64 = 2.0;

// Configuration defaults, overridable via data-* attributes on the canvas
pub const DEFAULT_BLOCK_SIZE: f32 = 10.0;
pub const DEFAULT_GAP_SIZE: f32 = 1.0;
pub const DEFAULT_HOVER_RADIUS: f32 = 1.6;
pub const DEFAULT_TRAIL_LIFETIME: f32 = 4.0;
pub const DEFAULT_MAX_ROTATION_DEG: f32 = 20.0;
pub const DEFAULT_X_PROB: f32 = 0.005;
pub const DEFAULT_H_PROB: f32 = 0.02;

// Free-orbit view
pub const ORBIT_SENSITIVITY: f32 = 3.0; // radians per normalized drag unit
pub const ORBIT_PITCH_LIMIT: f32 = 1.2; // radians
pub const ORBIT_DAMPING: f32 = 0.06; // same approach factor as the hover tilt
pub const WHEEL_ZOOM_RATE: f32 = 0.0015; // zoom scale per wheel delta unit
pub const ZOOM_MIN: f32 = 0.6;
pub const ZOOM_MAX: f32 = 1.8;

/// The four page configurations sharing the engine.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Variant {
    #[default]
    Coin,
    Token,
    Safe,
    Blocks,
}

impl Variant {
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "coin" => Some(Self::Coin),
            "token" => Some(Self::Token),
            "safe" => Some(Self::Safe),
            "blocks" => Some(Self::Blocks),
            _ => None,
        }
    }

    /// Index the scene shader switches on.
    #[inline]
    pub fn scene_index(self) -> u32 {
        match self {
            Self::Coin => 0,
            Self::Token => 1,
            Self::Safe => 2,
            Self::Blocks => 3,
        }
    }

    /// Only the coin page runs the staged reveal.
    #[inline]
    pub fn reveal_enabled(self) -> bool {
        matches!(self, Self::Coin)
    }

    /// Half-height of the visible world in camera units; the block stack is
    /// taller than the round objects.
    #[inline]
    pub fn world_extent(self) -> f32 {
        match self {
            Self::Coin => 1.8,
            Self::Token => 1.6,
            Self::Safe => 1.7,
            Self::Blocks => 2.6,
        }
    }

    /// Half-size of the object's footprint, used for the bounding box and
    /// the pointer hit test.
    #[inline]
    pub fn object_half_size(self) -> (f32, f32) {
        match self {
            Self::Coin => (1.4, 1.4),
            Self::Token => (1.3, 1.3),
            Self::Safe => (1.25, 1.0),
            Self::Blocks => (1.7, 2.2),
        }
    }

    /// Round objects hit-test as discs, boxy ones as rectangles.
    #[inline]
    pub fn is_round(self) -> bool {
        matches!(self, Self::Coin | Self::Token)
    }
}
