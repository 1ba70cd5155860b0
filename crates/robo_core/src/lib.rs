//! robo_core: GPU-free model of the robotic arm viewer.
//!
//! | Module         | Responsibility                                          |
//! |----------------|---------------------------------------------------------|
//! | `camera`       | Orbit camera (yaw / pitch / distance around a target)   |
//! | `projection`   | Viewport and perspective projection per window size     |
//! | `arm`          | Joint angles with per-joint saturating ranges           |
//! | `controller`   | Key → camera/arm action table                           |
//! | `matrix_stack` | Explicit push/pop matrix stack                          |
//! | `kinematics`   | Link geometry and cumulative segment transforms         |
//! | `scene`        | Per-frame composition into a `DrawList`                 |
//! | `state`        | Event-driven application state                          |

pub mod arm;
pub mod camera;
pub mod controller;
pub mod kinematics;
pub mod matrix_stack;
pub mod projection;
pub mod scene;
pub mod state;

pub use arm::{ArmAngles, Joint, JointRange};
pub use camera::OrbitCamera;
pub use controller::{KeyAction, KeyboardController, SpecialKey};
pub use kinematics::{ArmModel, Segment, SegmentPose};
pub use matrix_stack::MatrixStack;
pub use projection::{reshape, Projection, Viewport};
pub use scene::{DrawItem, DrawList, MeshKind, SceneLayout, TextureSlot};
pub use state::{SceneEvent, SceneState};

// glam math types re-exported so downstream crates agree on one version
pub use glam;
