/// A drawable GPU mesh: vertex and index buffers plus the index count.
///
/// Buffers are `Arc`-wrapped, so cloning a `Mesh` never copies GPU memory.
use std::sync::Arc;

use robo_core::MeshKind;
use wgpu::util::DeviceExt;

use super::{primitives, Vertex};

#[derive(Clone)]
pub struct Mesh {
    pub vertex_buffer: Arc<wgpu::Buffer>,
    pub index_buffer: Arc<wgpu::Buffer>,
    pub index_count: u32,
    pub index_format: wgpu::IndexFormat,
}

impl Mesh {
    /// Uploads immutable vertex and `u16` index buffers labelled
    /// `"{name} VB"` and `"{name} IB"`.
    pub fn upload(device: &wgpu::Device, name: &str, vertices: &[Vertex], indices: &[u16]) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{name} VB")),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{name} IB")),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer: Arc::new(vertex_buffer),
            index_buffer: Arc::new(index_buffer),
            index_count: indices.len() as u32,
            index_format: wgpu::IndexFormat::Uint16,
        }
    }

    pub fn cube(device: &wgpu::Device) -> Self {
        primitives::cube(device)
    }

    pub fn floor(device: &wgpu::Device) -> Self {
        primitives::floor_quad(device)
    }
}

/// One uploaded mesh per [`MeshKind`], built once at renderer creation.
pub struct MeshLibrary {
    floor: Mesh,
    cube: Mesh,
}

impl MeshLibrary {
    pub fn new(device: &wgpu::Device) -> Self {
        Self {
            floor: Mesh::floor(device),
            cube: Mesh::cube(device),
        }
    }

    pub fn get(&self, kind: MeshKind) -> &Mesh {
        match kind {
            MeshKind::Floor => &self.floor,
            MeshKind::Cube => &self.cube,
        }
    }
}
