/// `robo_renderer`: wgpu rendering of a `robo_core::DrawList`.
///
/// # Module layout
///
/// | Module          | Responsibility                                         |
/// |-----------------|--------------------------------------------------------|
/// | `context`       | `EngineContext`: instance, adapter, device, queue      |
/// | `texture`       | Image file → sampled GPU texture, `LoadError`          |
/// | `resources`     | Dynamic model buffer, materials                        |
/// | `geometry`      | `Vertex`, `Mesh`, floor quad and cube primitives       |
/// | `camera`        | Projection uniform (group 0)                           |
/// | `pipeline`      | Bind-group layouts + compiled `WorldPipeline`          |
/// | `render_target` | Depth attachment                                       |
/// | `graph`         | `RenderPass` trait + `FramePacket`                     |
/// | `passes`        | `WorldPass`                                            |
pub mod camera;
pub mod context;
pub mod geometry;
pub mod graph;
pub mod passes;
pub mod pipeline;
pub mod render_target;
pub mod resources;
pub mod texture;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use context::{ContextError, EngineContext};
pub use geometry::{Mesh, MeshLibrary, Vertex};
pub use graph::{DrawCommand, FramePacket, RenderPass};
pub use robo_core::Viewport;
pub use texture::{load_texture, LoadError, Texture};

// ── Internal imports ──────────────────────────────────────────────────────────

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use robo_core::{DrawList, TextureSlot};

use camera::GpuCamera;
use passes::WorldPass;
use pipeline::{PipelineLayouts, WorldPipeline};
use render_target::DepthTarget;
use resources::{Material, ModelUniform};

// ── Renderer ──────────────────────────────────────────────────────────────────

/// Owns every GPU resource of the viewer and turns one `DrawList` into one
/// frame using the **prepare → execute** pattern of [`RenderPass`].
pub struct Renderer {
    pub context: EngineContext,
    world: WorldPass,
    depth: DepthTarget,
    meshes: MeshLibrary,
    layouts: PipelineLayouts,

    // ── Materials ─────────────────────────────────────────────────────────
    materials: HashMap<TextureSlot, Material>,
    fallback: Material,

    width: u32,
    height: u32,
}

impl Renderer {
    /// Builds the pipeline, meshes and depth target for a surface of
    /// `format` measuring `width × height`.
    pub fn new(context: EngineContext, width: u32, height: u32, format: wgpu::TextureFormat) -> Self {
        let device = &context.device;

        let layouts = PipelineLayouts::new(device);
        let pipeline = WorldPipeline::new(device, format, layouts.clone());
        let camera = GpuCamera::new(
            device,
            robo_core::Projection::for_size(width, height).matrix(),
            &layouts.camera,
        );
        let world = WorldPass::new(device, pipeline, camera);

        let depth = DepthTarget::new(device, width, height);
        let meshes = MeshLibrary::new(device);
        let fallback = Material::white(device, &context.queue, &layouts.material);

        Self {
            world,
            depth,
            meshes,
            layouts,
            materials: HashMap::new(),
            fallback,
            width,
            height,
            context,
        }
    }

    // ── Materials ─────────────────────────────────────────────────────────────

    /// Binds `texture` to every draw item sampling `slot`, replacing any
    /// texture bound before.
    pub fn set_texture(&mut self, slot: TextureSlot, texture: Texture) {
        let material = Material::new(&self.context.device, &self.layouts.material, texture);
        self.materials.insert(slot, material);
    }

    /// Loads `path` and binds it to `slot`.
    pub fn load_texture(&mut self, slot: TextureSlot, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let texture = texture::load_texture(&self.context.device, &self.context.queue, path)?;
        self.set_texture(slot, texture);
        Ok(())
    }

    // ── Frame API ─────────────────────────────────────────────────────────────

    /// Colour the frame is cleared to before drawing.  `rgba` is in sRGB
    /// like every other colour the user picks; the swapchain is an sRGB
    /// format, so the clear value is converted to linear here.
    pub fn set_clear_color(&mut self, rgba: [f64; 4]) {
        self.world.clear_color = clear_color(rgba);
    }

    pub fn begin_frame(&self) -> wgpu::CommandEncoder {
        self.context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            })
    }

    /// Records `list` into `encoder`, drawing into `view` (normally the
    /// current swapchain frame).
    pub fn render(&mut self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView, list: &DrawList) {
        let packet = self.build_packet(list);
        let device = &self.context.device;
        let queue = &self.context.queue;

        self.world.prepare(device, queue, &packet);
        self.world.execute(
            encoder,
            view,
            Some(&self.depth.view),
            (self.width, self.height),
            &packet,
        );
    }

    // ── Resize ────────────────────────────────────────────────────────────────

    /// Recreates size-dependent targets.  Zero sizes are ignored; the
    /// surface is not reconfigured while minimised either.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 || (width, height) == (self.width, self.height) {
            return;
        }
        self.depth.resize(&self.context.device, width, height);
        self.width = width;
        self.height = height;
    }

    // ── Private helpers ───────────────────────────────────────────────────────

    fn material(&self, slot: TextureSlot) -> Arc<wgpu::BindGroup> {
        self.materials
            .get(&slot)
            .unwrap_or(&self.fallback)
            .bind_group
            .clone()
    }

    fn build_packet(&self, list: &DrawList) -> FramePacket {
        let commands = list
            .items
            .iter()
            .map(|item| DrawCommand {
                mesh: self.meshes.get(item.mesh).clone(),
                material: self.material(item.texture),
                model: ModelUniform::new(item.model_view, item.tint, item.uv_scale),
            })
            .collect();

        FramePacket {
            viewport: list.viewport,
            projection: list.projection,
            commands,
        }
    }
}

/// sRGB transfer function, inverted.
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Alpha is already linear.
fn clear_color(rgba: [f64; 4]) -> wgpu::Color {
    wgpu::Color {
        r: srgb_to_linear(rgba[0]),
        g: srgb_to_linear(rgba[1]),
        b: srgb_to_linear(rgba[2]),
        a: rgba[3],
    }
}
