use super::constants::TRAIL_CAPACITY;
use super::trail::TrailPool;

/// Inert value for unused trail slots: far off-grid and fully aged so the
/// shader's fixed-capacity loop skips them. Strict padding matters because
/// the array otherwise keeps values from entities removed on earlier frames.
pub const TRAIL_SLOT_SENTINEL: [f32; 4] = [-10.0, -10.0, 1.0, 0.0];

/// Per-frame uniform snapshot consumed by the grid fragment shader.
/// Field order mirrors the WGSL struct; the header is 20 floats (80 bytes)
/// so the trail array begins 16-byte aligned with no padding.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GridUniforms {
    pub resolution: [f32; 2],
    pub hover_pos: [f32; 2],
    pub time: f32,
    pub hover_active: f32,
    pub hover_present: f32,
    pub trail_count: f32,
    pub block_size: f32,
    pub gap_size: f32,
    pub hover_radius: f32,
    pub x_prob: f32,
    pub h_prob: f32,
    pub fill_enabled: f32,
    pub fill_progress: f32,
    pub fill_span: f32,
    pub fill_y_min: f32,
    pub fill_y_max: f32,
    pub fill_x_min: f32,
    pub fill_x_max: f32,
    /// (col, row, normalized age, unused) per slot.
    pub trails: [[f32; 4]; TRAIL_CAPACITY],
}

/// Copy the pool's interpolated positions and normalized ages into the
/// fixed-capacity slot array, padding every unused slot with the sentinel.
/// Returns the active count.
pub fn write_trail_slots(slots: &mut [[f32; 4]; TRAIL_CAPACITY], pool: &TrailPool) -> u32 {
    let count = pool.len().min(TRAIL_CAPACITY);
    for (slot, entry) in slots.iter_mut().zip(pool.entries().iter().take(count)) {
        *slot = [entry.current.1, entry.current.0, entry.age_norm(), 0.0];
    }
    for slot in slots.iter_mut().skip(count) {
        *slot = TRAIL_SLOT_SENTINEL;
    }
    count as u32
}

/// Instantiate the grid shader template with the trail array capacity.
/// Runs once at pipeline creation; the source is never re-templated per frame.
pub fn grid_shader_source(template: &str, capacity: usize) -> String {
    template.replace("{{TRAIL_CAPACITY}}", &capacity.to_string())
}
