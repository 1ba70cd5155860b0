/// A texture bound for sampling at group(2).
use std::sync::Arc;

use image::{Rgba, RgbaImage};

use crate::texture::Texture;

pub struct Material {
    pub texture: Texture,
    pub bind_group: Arc<wgpu::BindGroup>,
}

impl Material {
    /// `layout` must be the material layout (texture at 0, sampler at 1).
    pub fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, texture: Texture) -> Self {
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Material Bind Group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&texture.sampler),
                },
            ],
        });
        Self {
            texture,
            bind_group: Arc::new(bind_group),
        }
    }

    /// Opaque white, used for slots that have no texture yet so untextured
    /// geometry still shows its tint and shading.
    pub fn white(device: &wgpu::Device, queue: &wgpu::Queue, layout: &wgpu::BindGroupLayout) -> Self {
        let pixel = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 255]));
        let texture = Texture::from_image(device, queue, &pixel, "White Texture");
        Self::new(device, layout, texture)
    }
}
