use crate::camera::OrthoCamera;
use crate::constants::Variant;
use glam::{Vec2, Vec3};

/// World-space bounding box of the rendered object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    #[inline]
    pub fn footprint(&self) -> (Vec2, Vec2) {
        (self.min.truncate(), self.max.truncate())
    }
}

/// Stand-in for the model collaborator: supplies the bounding box, a ready
/// flag and an analytic pointer hit test against the variant's footprint.
/// The reveal sequencer never starts until `ready` is set.
pub struct ModelStandIn {
    variant: Variant,
    aabb: Aabb,
    ready: bool,
}

impl ModelStandIn {
    pub fn new(variant: Variant) -> Self {
        let (hx, hy) = variant.object_half_size();
        Self {
            variant,
            aabb: Aabb {
                min: Vec3::new(-hx, -hy, -0.1),
                max: Vec3::new(hx, hy, 0.1),
            },
            ready: false,
        }
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        self.aabb
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Called once GPU resources exist and the object is actually drawn.
    pub fn set_ready(&mut self) {
        self.ready = true;
    }

    /// Does a world-space point land on the object? Discs for the round
    /// variants, the box footprint for the rest.
    pub fn hit_test(&self, world: Vec2) -> bool {
        let (hx, hy) = self.variant.object_half_size();
        if self.variant.is_round() {
            world.length() <= hx
        } else {
            world.x.abs() <= hx && world.y.abs() <= hy
        }
    }

    /// Normalized screen extents of the bounding box for the fill sequencer.
    pub fn project_bounds(&self, camera: &OrthoCamera, aspect: f32) -> (f32, f32, f32, f32) {
        let (min, max) = self.aabb.footprint();
        camera.project_box(min, max, aspect)
    }
}
