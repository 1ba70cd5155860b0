/// GPU-side projection uniform and its bind group (group 0).
///
/// View transforms are already folded into every draw item's model-view
/// matrix on the CPU, so the only per-frame camera data left for the GPU is
/// the projection.
use std::sync::Arc;

use glam::Mat4;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub projection: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new(projection: Mat4) -> Self {
        Self {
            projection: projection.to_cols_array_2d(),
        }
    }
}

pub struct GpuCamera {
    pub uniform: CameraUniform,
    pub buffer: Arc<wgpu::Buffer>,
    pub bind_group: Arc<wgpu::BindGroup>,
}

impl GpuCamera {
    /// `layout` must have a single `UNIFORM` buffer entry at binding 0.
    pub fn new(device: &wgpu::Device, projection: Mat4, layout: &wgpu::BindGroupLayout) -> Self {
        let uniform = CameraUniform::new(projection);
        let buf = Arc::new(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Uniform Buffer"),
            contents: bytemuck::bytes_of(&uniform),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        }));

        let bind_group = Arc::new(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buf.as_entire_binding(),
            }],
        }));

        Self {
            uniform,
            buffer: buf,
            bind_group,
        }
    }

    /// Uploads `projection` if it differs from the last synced value.
    pub fn sync(&mut self, queue: &wgpu::Queue, projection: Mat4) {
        let uniform = CameraUniform::new(projection);
        if uniform != self.uniform {
            self.uniform = uniform;
            queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(&self.uniform));
        }
    }
}
