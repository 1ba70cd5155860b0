/// Per-frame data handed immutably to every `RenderPass`.
///
/// Built from a `robo_core::DrawList` by resolving mesh kinds and texture
/// slots to GPU handles; passes never see the scene model itself.
use std::sync::Arc;

use glam::Mat4;
use robo_core::Viewport;

use crate::geometry::Mesh;
use crate::resources::ModelUniform;

/// A single mesh draw, fully resolved to GPU handles.
pub struct DrawCommand {
    pub mesh: Mesh,
    /// Texture + sampler bind group (group 2).
    pub material: Arc<wgpu::BindGroup>,
    /// Written into the model buffer slot of this command during `prepare`.
    pub model: ModelUniform,
}

pub struct FramePacket {
    pub viewport: Viewport,
    pub projection: Mat4,
    pub commands: Vec<DrawCommand>,
}
