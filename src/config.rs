use crate::constants::*;
use web_sys as web;

/// Configuration surface consumed from the page layer, read from `data-*`
/// attributes on the canvas. Trail capacity is compile-time
/// (`core::TRAIL_CAPACITY`) because the shader is built against it.
#[derive(Clone, Copy, Debug)]
pub struct SessionConfig {
    pub variant: Variant,
    pub block_size: f32,
    pub gap_size: f32,
    pub hover_radius: f32,
    pub trail_lifetime: f32,
    pub max_rotation_deg: f32,
    pub x_prob: f32,
    pub h_prob: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Coin,
            block_size: DEFAULT_BLOCK_SIZE,
            gap_size: DEFAULT_GAP_SIZE,
            hover_radius: DEFAULT_HOVER_RADIUS,
            trail_lifetime: DEFAULT_TRAIL_LIFETIME,
            max_rotation_deg: DEFAULT_MAX_ROTATION_DEG,
            x_prob: DEFAULT_X_PROB,
            h_prob: DEFAULT_H_PROB,
        }
    }
}

impl SessionConfig {
    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> Self {
        let defaults = Self::default();
        let variant = canvas
            .get_attribute("data-variant")
            .and_then(|v| Variant::from_attr(&v))
            .unwrap_or(defaults.variant);
        Self {
            variant,
            block_size: positive_attr(canvas, "data-block-size", defaults.block_size),
            gap_size: non_negative_attr(canvas, "data-gap-size", defaults.gap_size),
            hover_radius: positive_attr(canvas, "data-hover-radius", defaults.hover_radius),
            trail_lifetime: positive_attr(canvas, "data-trail-lifetime", defaults.trail_lifetime),
            max_rotation_deg: non_negative_attr(
                canvas,
                "data-max-rotation",
                defaults.max_rotation_deg,
            ),
            x_prob: unit_attr(canvas, "data-x-prob", defaults.x_prob),
            h_prob: unit_attr(canvas, "data-h-prob", defaults.h_prob),
        }
    }

    /// Cell pitch guarded against a zero/negative divide in the cell mapping.
    #[inline]
    pub fn pitch(&self) -> f32 {
        crate::core::cell_pitch(self.block_size, self.gap_size)
    }
}

fn parse_attr(canvas: &web::HtmlCanvasElement, name: &str) -> Option<f32> {
    canvas
        .get_attribute(name)
        .and_then(|v| v.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite())
}

fn positive_attr(canvas: &web::HtmlCanvasElement, name: &str, default: f32) -> f32 {
    parse_attr(canvas, name).filter(|v| *v > 0.0).unwrap_or(default)
}

fn non_negative_attr(canvas: &web::HtmlCanvasElement, name: &str, default: f32) -> f32 {
    parse_attr(canvas, name).filter(|v| *v >= 0.0).unwrap_or(default)
}

fn unit_attr(canvas: &web::HtmlCanvasElement, name: &str, default: f32) -> f32 {
    parse_attr(canvas, name)
        .filter(|v| (0.0..=1.0).contains(v))
        .unwrap_or(default)
}
