use robo_renderer::Renderer;
use winit::window::Window;

/// Access handed to every [`RoboApp`](crate::RoboApp) callback.
pub struct AppContext<'a> {
    /// Current window size in physical pixels.
    pub window_size: (u32, u32),

    pub window: &'a Window,

    /// Present once the GPU is up, which is always the case after `setup`
    /// has started.
    pub renderer: Option<&'a mut Renderer>,

    pub(crate) exit_requested: bool,
}

impl<'a> AppContext<'a> {
    pub(crate) fn new(window: &'a Window, window_size: (u32, u32), renderer: Option<&'a mut Renderer>) -> Self {
        Self {
            window_size,
            window,
            renderer,
            exit_requested: false,
        }
    }

    /// Stops the event loop after the current callback.
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    pub fn renderer(&mut self) -> Option<&mut Renderer> {
        self.renderer.as_deref_mut()
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.window_size.0
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.window_size.1
    }
}
