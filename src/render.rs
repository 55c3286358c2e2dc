use crate::core::GridUniforms;
use crate::session::SceneInputs;
use web_sys as web;

mod grid;
mod helpers;
mod icons;
mod scene;
mod targets;

use grid::GridResources;
use icons::IconTextures;
use scene::{SceneResources, SceneUniforms};
use targets::SceneTarget;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    scene: SceneResources,
    scene_target: SceneTarget,
    grid: GridResources,
    icons: IconTextures,
    linear_sampler: wgpu::Sampler,

    width: u32,
    height: u32,
    time_accum: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let scene = scene::create_scene_resources(&device, format);
        let scene_target = SceneTarget::new(&device, format, width, height);
        let icons = icons::create_icon_textures(&device, &queue);
        let grid = grid::create_grid_resources(
            &device,
            format,
            &linear_sampler,
            &scene_target.view,
            &icons.x_view,
            &icons.h_view,
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene,
            scene_target,
            grid,
            icons,
            linear_sampler,
            width,
            height,
            time_accum: 0.0,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);

            // The grid bind group samples the recreated scene target.
            self.scene_target
                .recreate(&self.device, self.config.format, width, height);
            self.grid.bind_group = grid::create_grid_bind_group(
                &self.device,
                &self.grid.bgl,
                &self.grid.uniform_buffer,
                &self.linear_sampler,
                &self.scene_target.view,
                &self.icons.x_view,
                &self.icons.h_view,
            );
        }
    }

    /// Scene pass into the offscreen target, then the grid pass over the
    /// swapchain, both against this frame's frozen uniforms.
    pub fn render(
        &mut self,
        dt_sec: f32,
        scene_in: &SceneInputs,
        grid_uniforms: &GridUniforms,
    ) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        let aspect = self.width as f32 / (self.height as f32).max(1.0);
        let scene_uniforms = SceneUniforms {
            resolution: [self.width as f32, self.height as f32],
            half_extent: [scene_in.extent * aspect, scene_in.extent],
            offset: [scene_in.offset.x, scene_in.offset.y],
            tilt: [scene_in.tilt.0, scene_in.tilt.1],
            time: self.time_accum,
            variant: scene_in.variant_index as f32,
            yaw: scene_in.yaw,
            pitch: scene_in.pitch,
            zoom: scene_in.zoom,
            _pad0: 0.0,
            _pad1: 0.0,
            _pad2: 0.0,
        };
        self.queue.write_buffer(
            &self.scene.uniform_buffer,
            0,
            bytemuck::bytes_of(&scene_uniforms),
        );
        self.queue.write_buffer(
            &self.grid.uniform_buffer,
            0,
            bytemuck::bytes_of(grid_uniforms),
        );

        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.scene_target.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::WHITE),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.scene.pipeline);
            rpass.set_bind_group(0, &self.scene.bind_group, &[]);
            rpass.draw(0..3, 0..1);
        }

        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("grid_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::WHITE),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.grid.pipeline);
            rpass.set_bind_group(0, &self.grid.bind_group, &[]);
            rpass.draw(0..3, 0..1);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
