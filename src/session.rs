use crate::camera::OrthoCamera;
use crate::config::SessionConfig;
use crate::constants::{
    ORBIT_DAMPING, ORBIT_PITCH_LIMIT, ORBIT_SENSITIVITY, WHEEL_ZOOM_RATE, ZOOM_MAX, ZOOM_MIN,
};
use crate::core::{
    grid_dims, write_trail_slots, FillBounds, GridUniforms, PointerTracker, RevealSequencer,
    TrailPool, TRAIL_CAPACITY,
};
use crate::model::ModelStandIn;
use glam::Vec2;

/// Camera control mode. Constrained until the reveal completes (immediately
/// free on variants without a reveal); the switch is irreversible per mount.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ViewMode {
    Constrained,
    Free,
}

/// Values the scene pass needs for one frame.
pub struct SceneInputs {
    pub tilt: (f32, f32),
    pub yaw: f32,
    pub pitch: f32,
    pub zoom: f32,
    pub offset: Vec2,
    pub extent: f32,
    pub variant_index: u32,
}

/// Per-mount state: trail pool, pointer tracker, reveal sequencer, model
/// stand-in and view mode. Constructed on mount, dropped on teardown; all
/// mutation happens on the RAF callback or synchronously from pointer
/// handlers between frames.
pub struct Session {
    pub config: SessionConfig,
    tracker: PointerTracker,
    pool: TrailPool,
    reveal: RevealSequencer,
    model: ModelStandIn,
    camera: OrthoCamera,
    view: ViewMode,
    pointer_down: bool,
    yaw: f32,
    pitch: f32,
    yaw_target: f32,
    pitch_target: f32,
    zoom_target: f32,
    elapsed: f32,
    resolution: (f32, f32),
}

impl Session {
    pub fn new(config: SessionConfig, seed: u64) -> Self {
        let view = if config.variant.reveal_enabled() {
            ViewMode::Constrained
        } else {
            ViewMode::Free
        };
        Self {
            tracker: PointerTracker::new(config.max_rotation_deg),
            pool: TrailPool::new(TRAIL_CAPACITY, config.trail_lifetime, seed),
            reveal: RevealSequencer::new(config.variant.reveal_enabled()),
            model: ModelStandIn::new(config.variant),
            camera: OrthoCamera::new(config.variant.world_extent()),
            view,
            pointer_down: false,
            yaw: 0.0,
            pitch: 0.0,
            yaw_target: 0.0,
            pitch_target: 0.0,
            zoom_target: 1.0,
            elapsed: 0.0,
            resolution: (0.0, 0.0),
            config,
        }
    }

    pub fn set_resolution(&mut self, width: f32, height: f32) {
        if self.resolution == (width, height) {
            return;
        }
        self.resolution = (width, height);
        // The projected fill bounds depend on the aspect, so a resize during
        // the reveal has to re-run the projection.
        if self.model.is_ready() && !self.reveal.is_complete() {
            self.project_fill_bounds();
        }
    }

    #[inline]
    fn aspect(&self) -> f32 {
        if self.resolution.1 > 0.0 {
            self.resolution.0 / self.resolution.1
        } else {
            1.0
        }
    }

    #[inline]
    pub fn view_mode(&self) -> ViewMode {
        self.view
    }

    /// GPU resources exist and the object is drawn: mark the model ready and
    /// hand its projected bounds to the reveal sequencer.
    pub fn model_ready(&mut self) {
        self.model.set_ready();
        self.project_fill_bounds();
    }

    fn project_fill_bounds(&mut self) {
        let (y_min, y_max, x_min, x_max) = self.model.project_bounds(&self.camera, self.aspect());
        self.reveal
            .set_bounds(FillBounds::from_projection(y_min, y_max, x_min, x_max));
    }

    pub fn pointer_entered(&mut self, uv: (f32, f32)) {
        if let Some(cell) = self.tracker.enter(uv, self.resolution, self.config.pitch()) {
            let (rows, cols) = grid_dims(self.resolution.0, self.resolution.1, self.config.pitch());
            self.pool.spawn_neighbors(cell, rows, cols);
        }
    }

    pub fn pointer_moved(&mut self, uv: (f32, f32)) {
        // In the free view a held pointer orbits instead of steering the tilt.
        if self.view == ViewMode::Free && self.pointer_down {
            let du = uv.0 - self.tracker.pos.0;
            let dv = uv.1 - self.tracker.pos.1;
            self.yaw_target += du * ORBIT_SENSITIVITY;
            self.pitch_target =
                (self.pitch_target - dv * ORBIT_SENSITIVITY).clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
        }
        if let Some(cell) = self.tracker.moved(uv, self.resolution, self.config.pitch()) {
            let (rows, cols) = grid_dims(self.resolution.0, self.resolution.1, self.config.pitch());
            self.pool.spawn_neighbors(cell, rows, cols);
        }
    }

    pub fn pointer_left(&mut self) {
        self.pointer_down = false;
        self.tracker.leave();
    }

    /// Pointer pressed at a normalized position. Returns whether it landed on
    /// the object, which the wiring uses to toggle touch scrolling.
    pub fn pointer_pressed(&mut self, uv: (f32, f32)) -> bool {
        self.pointer_down = true;
        let world = self
            .camera
            .screen_to_world(Vec2::new(uv.0, uv.1), self.aspect());
        self.model.hit_test(world)
    }

    pub fn pointer_released(&mut self) {
        self.pointer_down = false;
    }

    /// Wheel zoom, only honored in the free view. Returns whether consumed.
    pub fn wheel(&mut self, delta_y: f32) -> bool {
        if self.view != ViewMode::Free {
            return false;
        }
        self.zoom_target =
            (self.zoom_target * (1.0 - delta_y * WHEEL_ZOOM_RATE)).clamp(ZOOM_MIN, ZOOM_MAX);
        true
    }

    /// Per-frame simulation step: activity decay, tilt damping, trail
    /// playback, reveal progress and orbit smoothing.
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
        self.tracker.tick(dt);
        self.pool.advance(dt);
        if self.reveal.tick(self.elapsed) {
            self.view = ViewMode::Free;
        }
        self.yaw += (self.yaw_target - self.yaw) * ORBIT_DAMPING;
        self.pitch += (self.pitch_target - self.pitch) * ORBIT_DAMPING;
        self.camera.zoom += (self.zoom_target - self.camera.zoom) * ORBIT_DAMPING;
    }

    /// Freeze this frame's state into the grid shader's uniform set.
    pub fn grid_uniforms(&self) -> GridUniforms {
        let bounds = self.reveal.bounds();
        let mut uni = GridUniforms {
            resolution: [self.resolution.0, self.resolution.1],
            hover_pos: [self.tracker.pos.0, self.tracker.pos.1],
            time: self.elapsed,
            hover_active: if self.tracker.active { 1.0 } else { 0.0 },
            hover_present: if self.tracker.hovered { 1.0 } else { 0.0 },
            trail_count: 0.0,
            block_size: self.config.block_size,
            gap_size: self.config.gap_size,
            hover_radius: self.config.hover_radius,
            x_prob: self.config.x_prob,
            h_prob: self.config.h_prob,
            fill_enabled: if self.reveal.is_enabled() && self.model.is_ready() {
                1.0
            } else {
                0.0
            },
            fill_progress: self.reveal.progress(),
            fill_span: self.reveal.span(),
            fill_y_min: bounds.y_min,
            fill_y_max: bounds.y_max,
            fill_x_min: bounds.x_min,
            fill_x_max: bounds.x_max,
            trails: [[0.0; 4]; TRAIL_CAPACITY],
        };
        uni.trail_count = write_trail_slots(&mut uni.trails, &self.pool) as f32;
        uni
    }

    pub fn scene_inputs(&self) -> SceneInputs {
        SceneInputs {
            tilt: self.tracker.tilt_current,
            yaw: self.yaw,
            pitch: self.pitch,
            zoom: self.camera.zoom,
            offset: self.camera.offset,
            extent: self.camera.extent,
            variant_index: self.config.variant.scene_index(),
        }
    }
}
