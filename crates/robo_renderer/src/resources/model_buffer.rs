/// Dynamic uniform buffer holding one [`ModelUniform`] per draw item.
///
/// Every item of a frame is written into its own aligned slot of a single
/// buffer; the world pass binds the buffer once and switches only the dynamic
/// offset between draw calls:
///
/// ```text
/// rpass.set_bind_group(1, &model_buf.bind_group, &[model_buf.offset(i)]);
/// ```
///
/// ## Alignment
///
/// Each slot starts on a multiple of `min_uniform_buffer_offset_alignment`
/// (256 bytes on most desktop hardware), so the stride is
/// `align_up(size_of::<ModelUniform>(), alignment)`.
use std::sync::Arc;

use glam::{Mat4, Vec2, Vec4};
use wgpu::util::DeviceExt;

/// Per-draw data read by both shader stages.
///
/// `uv_scale` is padded to a `vec4` to keep the WGSL struct layout trivial.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelUniform {
    pub model_view: [[f32; 4]; 4],
    pub tint: [f32; 4],
    pub uv_scale: [f32; 4],
}

impl ModelUniform {
    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;

    pub fn new(model_view: Mat4, tint: Vec4, uv_scale: Vec2) -> Self {
        Self {
            model_view: model_view.to_cols_array_2d(),
            tint: tint.to_array(),
            uv_scale: [uv_scale.x, uv_scale.y, 0.0, 0.0],
        }
    }
}

impl Default for ModelUniform {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Vec4::ONE, Vec2::ONE)
    }
}

pub struct ModelBuffer {
    pub buffer: wgpu::Buffer,
    /// References the whole buffer; the shader sees one slot at a time.
    pub bind_group: Arc<wgpu::BindGroup>,
    /// Byte distance between consecutive slots.
    pub stride: u32,
    capacity: usize,
}

impl ModelBuffer {
    /// `layout` must be the model layout with `has_dynamic_offset: true`.
    pub fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        initial_capacity: usize,
    ) -> Self {
        let alignment = device.limits().min_uniform_buffer_offset_alignment;
        let stride = align_up(ModelUniform::SIZE as u32, alignment);

        let capacity = initial_capacity.max(1);
        let buffer = Self::create_buffer(device, capacity, stride);
        let bind_group = Self::create_bind_group(device, layout, &buffer);

        Self {
            buffer,
            bind_group: Arc::new(bind_group),
            stride,
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Byte offset of slot `index`.
    #[inline]
    pub fn offset(&self, index: usize) -> u32 {
        slot_offset(index, self.stride)
    }

    #[inline]
    pub fn write(&self, queue: &wgpu::Queue, index: usize, data: &ModelUniform) {
        debug_assert!(index < self.capacity, "ModelBuffer slot out of range");
        queue.write_buffer(
            &self.buffer,
            self.offset(index) as u64,
            bytemuck::bytes_of(data),
        );
    }

    /// Grows the buffer (doubling) until it holds `needed` slots.  The bind
    /// group is recreated, so it must be re-fetched after this call.
    pub fn ensure_capacity(
        &mut self,
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        needed: usize,
    ) {
        let new_cap = grown_capacity(self.capacity, needed);
        if new_cap == self.capacity {
            return;
        }
        log::debug!("model buffer grows {} -> {} slots", self.capacity, new_cap);
        self.buffer = Self::create_buffer(device, new_cap, self.stride);
        self.bind_group = Arc::new(Self::create_bind_group(device, layout, &self.buffer));
        self.capacity = new_cap;
    }

    // ── Private helpers ──────────────────────────────────────────────────────

    fn create_buffer(device: &wgpu::Device, capacity: usize, stride: u32) -> wgpu::Buffer {
        // identity slots draw nothing surprising if a stale offset slips through
        let fill = ModelUniform::default();
        let mut data = vec![0u8; capacity * stride as usize];
        for slot in 0..capacity {
            let off = slot * stride as usize;
            data[off..off + ModelUniform::SIZE as usize].copy_from_slice(bytemuck::bytes_of(&fill));
        }
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("ModelBuffer"),
            contents: &data,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        })
    }

    fn create_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        buffer: &wgpu::Buffer,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("ModelBuffer BindGroup"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(ModelUniform::SIZE),
                }),
            }],
        })
    }
}

/// Round `value` up to the next multiple of `alignment` (a power of two).
#[inline]
fn align_up(value: u32, alignment: u32) -> u32 {
    (value + alignment - 1) & !(alignment - 1)
}

#[inline]
fn slot_offset(index: usize, stride: u32) -> u32 {
    (index as u32).wrapping_mul(stride)
}

fn grown_capacity(current: usize, needed: usize) -> usize {
    let mut cap = current.max(1);
    while cap < needed {
        cap *= 2;
    }
    cap
}
