use robo_core::{DrawList, SceneEvent};

use crate::context::AppContext;

/// Implemented by the program the shell hosts.
///
/// The shell calls the hooks on the event-loop thread only, strictly one
/// after another:
///
/// 1. `setup` once, after the GPU is ready and before the window is shown;
/// 2. `handle_event` for every key press, resize and frame;
/// 3. `draw` whenever a frame is rendered.
#[allow(unused_variables)]
pub trait RoboApp {
    /// Load textures and other startup resources.  An error aborts startup
    /// before the window becomes visible.
    fn setup(&mut self, ctx: &mut AppContext) -> anyhow::Result<()> {
        Ok(())
    }

    /// Returns `true` when the event changed what the next frame shows.
    fn handle_event(&mut self, event: &SceneEvent, ctx: &mut AppContext) -> bool {
        false
    }

    /// The frame to render.
    fn draw(&mut self, ctx: &mut AppContext) -> DrawList;

    /// Every raw winit event the shell does not consume itself.
    fn on_window_event(&mut self, event: &winit::event::WindowEvent, ctx: &mut AppContext) {}
}
