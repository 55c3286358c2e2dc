use super::constants::{
    HOVER_ACTIVITY_WINDOW, HOVER_ANGLE_EPSILON_SQ, HOVER_MOVE_EPSILON_SQ, ROTATION_DAMPING,
};
use super::grid::{cell_at, GridCell};

/// Pointer state over the canvas: normalized position (y up), movement
/// activity, the last discretized cell and the tilt rotation pair.
///
/// `active` means "moved meaningfully within the activity window" and decays
/// on its own; `hovered` tracks presence and only clears on leave.
pub struct PointerTracker {
    pub pos: (f32, f32),
    pub last_pos: (f32, f32),
    pub active: bool,
    pub hovered: bool,
    pub cell: Option<GridCell>,
    pub activity: f32,
    /// Direction of the last meaningful movement, radians.
    pub angle: f32,
    pub tilt_target: (f32, f32),
    pub tilt_current: (f32, f32),
    max_rotation: f32,
}

impl PointerTracker {
    pub fn new(max_rotation_deg: f32) -> Self {
        Self {
            pos: (0.5, 0.5),
            last_pos: (0.5, 0.5),
            active: false,
            hovered: false,
            cell: None,
            activity: 0.0,
            angle: 0.0,
            tilt_target: (0.0, 0.0),
            tilt_current: (0.0, 0.0),
            max_rotation: max_rotation_deg.to_radians(),
        }
    }

    /// Pointer entered the canvas; treated as the first move.
    pub fn enter(
        &mut self,
        pos: (f32, f32),
        resolution: (f32, f32),
        pitch: f32,
    ) -> Option<GridCell> {
        self.hovered = true;
        self.last_pos = self.pos;
        self.moved(pos, resolution, pitch)
    }

    /// Pointer moved to a new normalized position. Returns the grid cell the
    /// pointer crossed into, if any, so the caller can roll trail spawns.
    pub fn moved(
        &mut self,
        pos: (f32, f32),
        resolution: (f32, f32),
        pitch: f32,
    ) -> Option<GridCell> {
        self.hovered = true;
        let dx = pos.0 - self.last_pos.0;
        let dy = pos.1 - self.last_pos.1;
        let delta_sq = dx * dx + dy * dy;
        self.pos = pos;
        self.active = delta_sq > HOVER_MOVE_EPSILON_SQ;
        if delta_sq > HOVER_ANGLE_EPSILON_SQ {
            self.angle = dy.atan2(dx);
        }
        self.last_pos = pos;
        self.activity = HOVER_ACTIVITY_WINDOW;

        if resolution.0 <= 0.0 || resolution.1 <= 0.0 {
            return None;
        }
        let cell = cell_at(pos.0 * resolution.0, pos.1 * resolution.1, pitch);
        let entered = if self.cell != Some(cell) {
            self.cell = Some(cell);
            Some(cell)
        } else {
            None
        };

        let offset_x = (pos.0 - 0.5) * 2.0;
        let offset_y = (pos.1 - 0.5) * 2.0;
        self.tilt_target = (
            (-offset_y * self.max_rotation).clamp(-self.max_rotation, self.max_rotation),
            (offset_x * self.max_rotation).clamp(-self.max_rotation, self.max_rotation),
        );

        entered
    }

    /// Pointer left the canvas. Clearing the cell makes the next enter always
    /// register as a cell change.
    pub fn leave(&mut self) {
        self.active = false;
        self.cell = None;
        self.activity = 0.0;
        self.hovered = false;
        self.tilt_target = (0.0, 0.0);
    }

    /// Per-frame decay: the activity window runs down and the tilt rotation
    /// is damped toward its target instead of snapping.
    pub fn tick(&mut self, dt: f32) {
        if self.activity > 0.0 {
            self.activity = (self.activity - dt).max(0.0);
            if self.activity == 0.0 {
                self.active = false;
            }
        }
        self.tilt_current.0 += (self.tilt_target.0 - self.tilt_current.0) * ROTATION_DAMPING;
        self.tilt_current.1 += (self.tilt_target.1 - self.tilt_current.1) * ROTATION_DAMPING;
    }
}
