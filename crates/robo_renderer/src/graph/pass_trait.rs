/// Every stage of a frame implements this.
///
/// `prepare` → `execute`: buffer uploads happen in `prepare`, before the
/// encoder opens a render pass.
use wgpu::{CommandEncoder, Device, Queue, TextureView};

use crate::graph::FramePacket;

pub trait RenderPass: Send + Sync + 'static {
    /// Used as the wgpu debug label.
    fn name(&self) -> &str;

    fn prepare(&mut self, device: &Device, queue: &Queue, packet: &FramePacket);

    /// Records draw commands into `encoder`.  `target_size` is the size of
    /// `color_view` in pixels.
    fn execute(
        &mut self,
        encoder: &mut CommandEncoder,
        color_view: &TextureView,
        depth_view: Option<&TextureView>,
        target_size: (u32, u32),
        packet: &FramePacket,
    );
}
