use glam::Vec2;

/// Orthographic camera facing the object head-on. `extent` is the half-height
/// of the visible world; the half-width follows the canvas aspect.
#[derive(Clone, Copy, Debug)]
pub struct OrthoCamera {
    pub extent: f32,
    pub zoom: f32,
    pub offset: Vec2,
}

impl OrthoCamera {
    pub fn new(extent: f32) -> Self {
        Self {
            extent: extent.max(1e-3),
            zoom: 1.0,
            offset: Vec2::ZERO,
        }
    }

    /// Visible half-width and half-height for a given aspect ratio.
    #[inline]
    pub fn half_extent(&self, aspect: f32) -> Vec2 {
        Vec2::new(self.extent * aspect.max(1e-3), self.extent)
    }

    /// Normalized canvas position (y up) to world XY. The shader's scene pass
    /// applies the inverse of this mapping.
    pub fn screen_to_world(&self, uv: Vec2, aspect: f32) -> Vec2 {
        let ndc = uv * 2.0 - Vec2::ONE;
        ndc * self.half_extent(aspect) / self.zoom.max(1e-4) - self.offset
    }

    /// World XY to normalized canvas position (y up).
    pub fn world_to_screen(&self, p: Vec2, aspect: f32) -> Vec2 {
        let ndc = (p + self.offset) * self.zoom / self.half_extent(aspect);
        ndc * 0.5 + Vec2::splat(0.5)
    }

    /// Project a world-space XY box onto the canvas, returning
    /// `(y_min, y_max, x_min, x_max)` in normalized screen space. The caller
    /// clamps the result into fill bounds.
    pub fn project_box(&self, min: Vec2, max: Vec2, aspect: f32) -> (f32, f32, f32, f32) {
        let a = self.world_to_screen(min, aspect);
        let b = self.world_to_screen(max, aspect);
        (a.y.min(b.y), a.y.max(b.y), a.x.min(b.x), a.x.max(b.x))
    }
}
