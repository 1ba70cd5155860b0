//! Application shell for the robotic arm viewer.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use robo_app::{App, AppContext, RoboApp};
//! use robo_core::{DrawList, SceneEvent, SceneState};
//!
//! struct Viewer {
//!     scene: SceneState,
//! }
//!
//! impl RoboApp for Viewer {
//!     fn handle_event(&mut self, event: &SceneEvent, _ctx: &mut AppContext) -> bool {
//!         self.scene.handle(event)
//!     }
//!
//!     fn draw(&mut self, _ctx: &mut AppContext) -> DrawList {
//!         self.scene.compose()
//!     }
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     App::new(Viewer { scene: SceneState::new(800, 600) })
//!         .with_title("Viewer")
//!         .run()
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
mod graphics;
pub mod input;
pub mod logging;
mod runner;
pub mod traits;

pub use builder::{App, AppConfig};
pub use context::AppContext;
pub use error::AppError;
pub use traits::RoboApp;
