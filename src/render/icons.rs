use wgpu;

const ICON_SIZE: u32 = 64;

/// Procedural stand-ins for the page's icon assets: an X glyph keyed by its
/// alpha channel and an H glyph carrying the dark palette color in rgb.
pub(crate) struct IconTextures {
    pub(crate) x_view: wgpu::TextureView,
    pub(crate) h_view: wgpu::TextureView,
}

pub(crate) fn create_icon_textures(device: &wgpu::Device, queue: &wgpu::Queue) -> IconTextures {
    let x_view = upload_rgba(device, queue, "icon_x", &x_bitmap());
    let h_view = upload_rgba(device, queue, "icon_h", &h_bitmap());
    IconTextures { x_view, h_view }
}

fn upload_rgba(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    pixels: &[u8],
) -> wgpu::TextureView {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width: ICON_SIZE,
            height: ICON_SIZE,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &tex,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * ICON_SIZE),
            rows_per_image: Some(ICON_SIZE),
        },
        wgpu::Extent3d {
            width: ICON_SIZE,
            height: ICON_SIZE,
            depth_or_array_layers: 1,
        },
    );
    tex.create_view(&wgpu::TextureViewDescriptor::default())
}

// Two diagonal strokes; only the alpha channel matters to the shader.
fn x_bitmap() -> Vec<u8> {
    let s = ICON_SIZE as i32;
    let stroke = s / 8;
    let margin = s / 6;
    let mut px = vec![0u8; (s * s * 4) as usize];
    for y in 0..s {
        for x in 0..s {
            let inside = x >= margin && x < s - margin && y >= margin && y < s - margin;
            let on_main = (x - y).abs() <= stroke;
            let on_anti = (x + y - (s - 1)).abs() <= stroke;
            let a = if inside && (on_main || on_anti) { 255 } else { 0 };
            let i = ((y * s + x) * 4) as usize;
            px[i] = 255;
            px[i + 1] = 255;
            px[i + 2] = 255;
            px[i + 3] = a;
        }
    }
    px
}

// Two verticals and a crossbar in the dark palette color #FF4600.
fn h_bitmap() -> Vec<u8> {
    let s = ICON_SIZE as i32;
    let stroke = s / 7;
    let margin = s / 6;
    let mut px = vec![0u8; (s * s * 4) as usize];
    for y in 0..s {
        for x in 0..s {
            let inside = x >= margin && x < s - margin && y >= margin && y < s - margin;
            let on_left = x >= margin && x < margin + stroke;
            let on_right = x >= s - margin - stroke && x < s - margin;
            let on_bar = (y - s / 2).abs() <= stroke / 2;
            let a = if inside && (on_left || on_right || on_bar) {
                255
            } else {
                0
            };
            let i = ((y * s + x) * 4) as usize;
            px[i] = 255;
            px[i + 1] = 70;
            px[i + 2] = 0;
            px[i + 3] = a;
        }
    }
    px
}
