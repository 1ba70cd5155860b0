//! Per-frame scene composition.
//!
//! The renderer never sees the camera or the arm angles directly: each frame
//! the scene is flattened into a [`DrawList`] of model-view matrices, built by
//! walking a [`MatrixStack`](crate::MatrixStack) exactly like the
//! fixed-function sequence it replaces.

pub mod compose;
pub mod draw_list;

pub use compose::{compose_frame, draw_arm, draw_floor, SceneLayout};
pub use draw_list::{DrawItem, DrawList, MeshKind, TextureSlot};
