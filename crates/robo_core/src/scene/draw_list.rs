use glam::{Mat4, Vec2, Vec4};

use crate::projection::Viewport;

/// Geometry a draw item refers to.  The renderer owns one GPU mesh per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshKind {
    /// Unit quad in the XZ plane, `[-0.5, 0.5]²`, facing +Y.
    Floor,
    /// Unit cube centred at the origin, `[-0.5, 0.5]³`.
    Cube,
}

/// Texture a draw item is sampled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    Floor,
    Arm,
}

/// One draw call, fully resolved on the CPU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub mesh: MeshKind,
    pub texture: TextureSlot,
    /// Object → eye space (view · model).
    pub model_view: Mat4,
    /// Multiplied with the sampled texel.
    pub tint: Vec4,
    /// Texture-coordinate scale; values above 1 tile the texture.
    pub uv_scale: Vec2,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    pub viewport: Viewport,
    pub projection: Mat4,
    pub items: Vec<DrawItem>,
}

impl DrawList {
    pub fn new(viewport: Viewport, projection: Mat4) -> Self {
        Self {
            viewport,
            projection,
            items: Vec::new(),
        }
    }

    #[inline]
    pub fn push(&mut self, item: DrawItem) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items sampled from `slot`, in submission order.
    pub fn with_texture(&self, slot: TextureSlot) -> impl Iterator<Item = &DrawItem> {
        self.items.iter().filter(move |item| item.texture == slot)
    }
}
