use super::helpers;
use wgpu;

/// Offscreen color target the scene pass renders into; the grid pass samples
/// it per cell center. Same format as the swapchain, recreated on resize.
pub(crate) struct SceneTarget {
    pub(crate) _tex: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
}

impl SceneTarget {
    pub(crate) fn new(device: &wgpu::Device, format: wgpu::TextureFormat, width: u32, height: u32) -> Self {
        let (tex, view) = helpers::create_color_texture(
            device,
            "scene_target",
            width,
            height,
            format,
            wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        );
        Self { _tex: tex, view }
    }

    pub(crate) fn recreate(
        &mut self,
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) {
        *self = Self::new(device, format, width, height);
    }
}
