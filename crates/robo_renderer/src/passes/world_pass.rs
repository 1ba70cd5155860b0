/// The 3-D pass: clears colour and depth, then draws every command of the
/// frame in submission order with its own model slot and material.
use robo_core::Viewport;
use wgpu::{
    Color, CommandEncoder, Device, LoadOp, Operations, Queue, RenderPassColorAttachment,
    RenderPassDepthStencilAttachment, RenderPassDescriptor, StoreOp, TextureView,
};

use crate::camera::GpuCamera;
use crate::graph::{FramePacket, RenderPass};
use crate::pipeline::WorldPipeline;
use crate::resources::ModelBuffer;

pub struct WorldPass {
    pipeline: WorldPipeline,
    camera: GpuCamera,
    models: ModelBuffer,
    pub clear_color: Color,
}

impl WorldPass {
    pub fn new(device: &Device, pipeline: WorldPipeline, camera: GpuCamera) -> Self {
        let models = ModelBuffer::new(device, &pipeline.layouts.model, 16);
        Self {
            pipeline,
            camera,
            models,
            clear_color: Color::BLACK,
        }
    }
}

impl RenderPass for WorldPass {
    fn name(&self) -> &str {
        "World Pass"
    }

    fn prepare(&mut self, device: &Device, queue: &Queue, packet: &FramePacket) {
        self.camera.sync(queue, packet.projection);
        self.models
            .ensure_capacity(device, &self.pipeline.layouts.model, packet.commands.len());
        for (i, cmd) in packet.commands.iter().enumerate() {
            self.models.write(queue, i, &cmd.model);
        }
    }

    fn execute(
        &mut self,
        encoder: &mut CommandEncoder,
        color_view: &TextureView,
        depth_view: Option<&TextureView>,
        target_size: (u32, u32),
        packet: &FramePacket,
    ) {
        let mut rpass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some(self.name()),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: color_view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(self.clear_color),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: depth_view.map(|v| RenderPassDepthStencilAttachment {
                view: v,
                depth_ops: Some(Operations {
                    load: LoadOp::Clear(1.0),
                    store: StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        // nothing visible: the clear above is the whole frame
        let Some(vp) = clip_viewport(packet.viewport, target_size) else {
            return;
        };
        rpass.set_viewport(
            vp.x as f32,
            vp.y as f32,
            vp.width as f32,
            vp.height as f32,
            0.0,
            1.0,
        );
        rpass.set_scissor_rect(vp.x, vp.y, vp.width, vp.height);

        rpass.set_pipeline(&self.pipeline.inner);
        rpass.set_bind_group(0, &*self.camera.bind_group, &[]);

        for (i, cmd) in packet.commands.iter().enumerate() {
            rpass.set_bind_group(1, &*self.models.bind_group, &[self.models.offset(i)]);
            rpass.set_bind_group(2, &*cmd.material, &[]);
            rpass.set_vertex_buffer(0, cmd.mesh.vertex_buffer.slice(..));
            rpass.set_index_buffer(cmd.mesh.index_buffer.slice(..), cmd.mesh.index_format);
            rpass.draw_indexed(0..cmd.mesh.index_count, 0, 0..1);
        }
    }
}

/// Intersects `vp` with a `width × height` target.  wgpu rejects viewports
/// that leave the attachment, and an empty one has nothing to draw.
pub fn clip_viewport(vp: Viewport, (width, height): (u32, u32)) -> Option<Viewport> {
    let x = vp.x.min(width);
    let y = vp.y.min(height);
    let clipped = Viewport {
        x,
        y,
        width: vp.width.min(width - x),
        height: vp.height.min(height - y),
    };
    (!clipped.is_empty()).then_some(clipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_viewport_is_unchanged() {
        let vp = Viewport::full(800, 600);
        assert_eq!(clip_viewport(vp, (800, 600)), Some(vp));
    }

    #[test]
    fn stale_viewport_is_clipped_to_target() {
        let vp = Viewport::full(1024, 768);
        assert_eq!(clip_viewport(vp, (800, 600)), Some(Viewport::full(800, 600)));
    }

    #[test]
    fn empty_or_offscreen_viewport_is_skipped() {
        assert_eq!(clip_viewport(Viewport::full(800, 0), (800, 600)), None);
        let off = Viewport { x: 900, y: 0, width: 10, height: 10 };
        assert_eq!(clip_viewport(off, (800, 600)), None);
    }
}
