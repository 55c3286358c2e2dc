use super::constants::{
    FILL_COLUMNS, FILL_COLUMN_HEIGHTS, FILL_PHASE_COUNT, FILL_PHASE_DURATION, FILL_PHASE_OVERLAP,
};

/// Normalized screen-space extents of the model's projected bounding box.
/// The staged fill paints columns between `y_min` and the per-column top,
/// across `x_min..x_max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillBounds {
    pub y_min: f32,
    pub y_max: f32,
    pub x_min: f32,
    pub x_max: f32,
}

impl Default for FillBounds {
    fn default() -> Self {
        Self {
            y_min: 0.0,
            y_max: 1.0,
            x_min: 0.0,
            x_max: 1.0,
        }
    }
}

impl FillBounds {
    /// Clamp raw projected extents into [0, 1], forcing each max strictly
    /// above its min so the shader's range divisions stay finite.
    pub fn from_projection(y_min: f32, y_max: f32, x_min: f32, x_max: f32) -> Self {
        let y_min = y_min.clamp(0.0, 1.0);
        let y_max = y_max.clamp(0.0, 1.0);
        let x_min = x_min.clamp(0.0, 1.0);
        let x_max = x_max.clamp(0.0, 1.0);
        Self {
            y_min,
            y_max: if y_max > y_min {
                y_max
            } else {
                (y_min + 0.001).min(1.0)
            },
            x_min,
            x_max: if x_max > x_min {
                x_max
            } else {
                (x_min + 0.001).min(1.0)
            },
        }
    }
}

/// Total normalized span of the overlapped phase sequence.
#[inline]
pub fn total_span(phases: usize, overlap: f32) -> f32 {
    (1.0 + phases.saturating_sub(1) as f32 * (1.0 - overlap)).max(1.0)
}

/// Local progress of one phase given the sequence-wide progress.
#[inline]
pub fn phase_progress(total_progress: f32, phase_index: usize, overlap: f32) -> f32 {
    let stride = (1.0 - overlap).max(0.0001);
    (total_progress - phase_index as f32 * stride).clamp(0.0, 1.0)
}

/// Column heights scaled so the tallest column reaches exactly the projected
/// top of the model bounds.
pub fn normalized_tower_heights() -> [f32; FILL_COLUMNS] {
    let tallest = FILL_COLUMN_HEIGHTS
        .iter()
        .copied()
        .fold(f32::MIN, f32::max)
        .max(1e-6);
    let mut out = [0.0; FILL_COLUMNS];
    for (i, h) in FILL_COLUMN_HEIGHTS.iter().enumerate() {
        out[i] = (h / tallest).max(0.0);
    }
    out
}

/// Which tower column a normalized x coordinate inside the fill bounds lands in.
#[inline]
pub fn column_index(normalized_x: f32) -> usize {
    let nx = normalized_x.clamp(0.0, 0.9999);
    ((nx * FILL_COLUMNS as f32).floor() as usize).min(FILL_COLUMNS - 1)
}

/// Drives the progressive reveal: pending until model bounds arrive, then
/// monotonic progress toward the total span. Completion fires exactly once;
/// the caller uses it to unlock the free view for the rest of the mount.
pub struct RevealSequencer {
    enabled: bool,
    start_elapsed: Option<f32>,
    progress: f32,
    completed: bool,
    bounds: FillBounds,
    bounds_ready: bool,
}

impl RevealSequencer {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            start_elapsed: None,
            progress: 0.0,
            completed: false,
            bounds: FillBounds::default(),
            bounds_ready: false,
        }
    }

    #[inline]
    pub fn span(&self) -> f32 {
        total_span(FILL_PHASE_COUNT, FILL_PHASE_OVERLAP)
    }

    /// Model bounds became available; the clock starts on the next tick.
    pub fn set_bounds(&mut self, bounds: FillBounds) {
        self.bounds = bounds;
        self.bounds_ready = true;
    }

    #[inline]
    pub fn bounds(&self) -> FillBounds {
        self.bounds
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.completed || !self.enabled
    }

    /// Advance against the session's elapsed clock. Returns true exactly on
    /// the tick the reveal completes.
    pub fn tick(&mut self, elapsed: f32) -> bool {
        if !self.enabled || !self.bounds_ready {
            return false;
        }
        let start = *self.start_elapsed.get_or_insert(elapsed);
        let fill_elapsed = (elapsed - start).max(0.0);
        self.progress = (fill_elapsed / FILL_PHASE_DURATION).min(self.span());
        if !self.completed && self.progress >= self.span() {
            self.completed = true;
            return true;
        }
        false
    }
}
