use super::constants::MIN_PITCH;

/// One grid square in canvas space, addressed row-major from the bottom-left.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct GridCell {
    pub row: i32,
    pub col: i32,
}

impl GridCell {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// Pixel distance from the start of one cell to the next.
#[inline]
pub fn cell_pitch(block_size: f32, gap_size: f32) -> f32 {
    (block_size + gap_size).max(MIN_PITCH)
}

/// Map a pixel coordinate to its grid cell.
///
/// This is the single cell-mapping contract: the pointer tracker feeds it
/// backing-store pixels and the fragment shader computes the identical
/// `floor(coord / pitch)` per pixel, so both sides must receive the same
/// pitch.
#[inline]
pub fn cell_at(px_x: f32, px_y: f32, pitch: f32) -> GridCell {
    let pitch = pitch.max(MIN_PITCH);
    GridCell {
        row: (px_y / pitch).floor() as i32,
        col: (px_x / pitch).floor() as i32,
    }
}

/// Whole-cell grid extent covering a `width x height` pixel canvas.
/// Partial cells at the far edges are not counted, matching the area trails
/// are allowed to walk.
#[inline]
pub fn grid_dims(width: f32, height: f32, pitch: f32) -> (i32, i32) {
    let pitch = pitch.max(MIN_PITCH);
    let rows = ((height / pitch).floor() as i32).max(1);
    let cols = ((width / pitch).floor() as i32).max(1);
    (rows, cols)
}

/// Linear interpolation between two cells, used for trail playback.
#[inline]
pub fn lerp_cells(a: GridCell, b: GridCell, t: f32) -> (f32, f32) {
    let t = t.clamp(0.0, 1.0);
    (
        a.row as f32 + (b.row - a.row) as f32 * t,
        a.col as f32 + (b.col - a.col) as f32 * t,
    )
}
