use std::sync::Arc;

use robo_core::SceneEvent;
use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::builder::AppConfig;
use crate::context::AppContext;
use crate::error::AppError;
use crate::graphics::GraphicsState;
use crate::input::{translate_key, KeyInput};
use crate::traits::RoboApp;

struct Runner<A: RoboApp> {
    app: A,
    config: AppConfig,
    window: Option<Arc<Window>>,
    graphics: Option<GraphicsState>,
    window_size: (u32, u32),
    /// First fatal error; ends the loop and is returned from `run`.
    error: Option<anyhow::Error>,
}

impl<A: RoboApp> Runner<A> {
    fn new(app: A, config: AppConfig) -> Self {
        let window_size = (config.width, config.height);
        Self {
            app,
            config,
            window: None,
            graphics: None,
            window_size,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.error.get_or_insert(err);
        event_loop.exit();
    }

    /// Window (hidden) → GPU → app setup → first reshape → show.
    fn start(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let mut attributes = Window::default_attributes()
            .with_title(&self.config.title)
            .with_resizable(self.config.resizable)
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height))
            .with_visible(false);
        if let Some((x, y)) = self.config.position {
            attributes = attributes.with_position(PhysicalPosition::new(x, y));
        }

        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .map_err(|e| AppError::Window(e.to_string()))?,
        );
        let size = window.inner_size();
        self.window_size = (size.width, size.height);

        let mut gfx = pollster::block_on(GraphicsState::new(
            window.clone(),
            size.width,
            size.height,
            self.config.vsync,
        ))?;
        gfx.renderer.set_clear_color(self.config.clear_color);

        {
            let mut ctx = AppContext::new(&window, self.window_size, Some(&mut gfx.renderer));
            self.app.setup(&mut ctx)?;
            // the real inner size may differ from the requested one (scaling)
            self.app.handle_event(
                &SceneEvent::Resize {
                    width: size.width,
                    height: size.height,
                },
                &mut ctx,
            );
        }

        window.set_visible(true);
        window.request_redraw();
        self.window = Some(window);
        self.graphics = Some(gfx);
        Ok(())
    }

    /// Feeds one scene event to the app.  Returns whether a redraw is due.
    fn dispatch(&mut self, event_loop: &ActiveEventLoop, event: SceneEvent) -> bool {
        let Some(window) = self.window.clone() else {
            return false;
        };
        let mut ctx = AppContext::new(
            &window,
            self.window_size,
            self.graphics.as_mut().map(|g| &mut g.renderer),
        );
        let changed = self.app.handle_event(&event, &mut ctx);
        if ctx.exit_requested {
            event_loop.exit();
        }
        changed
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.dispatch(event_loop, SceneEvent::Redraw);
        let (Some(window), Some(gfx)) = (self.window.clone(), self.graphics.as_mut()) else {
            return;
        };
        if self.window_size.0 == 0 || self.window_size.1 == 0 {
            return;
        }

        let list = {
            let mut ctx = AppContext::new(&window, self.window_size, None);
            let list = self.app.draw(&mut ctx);
            if ctx.exit_requested {
                event_loop.exit();
            }
            list
        };
        if let Err(err) = gfx.render(&list) {
            self.fail(event_loop, err.into());
        }
    }
}

impl<A: RoboApp> ApplicationHandler for Runner<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.start(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(gfx) = &mut self.graphics {
                    gfx.resize(size.width, size.height);
                }
                self.window_size = (size.width, size.height);
                if self.dispatch(
                    event_loop,
                    SceneEvent::Resize {
                        width: size.width,
                        height: size.height,
                    },
                ) {
                    self.request_redraw();
                }
            }
            // repeats are delivered as presses too, so a held key keeps stepping
            WindowEvent::KeyboardInput { event: key, .. } if key.state == ElementState::Pressed => {
                match translate_key(&key.logical_key) {
                    Some(KeyInput::Close) => event_loop.exit(),
                    Some(KeyInput::Scene(scene_event)) => {
                        if self.dispatch(event_loop, scene_event) {
                            self.request_redraw();
                        }
                    }
                    None => log::trace!("ignored key {:?}", key.logical_key),
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            other => {
                if let Some(window) = self.window.clone() {
                    let mut ctx = AppContext::new(
                        &window,
                        self.window_size,
                        self.graphics.as_mut().map(|g| &mut g.renderer),
                    );
                    self.app.on_window_event(&other, &mut ctx);
                    if ctx.exit_requested {
                        event_loop.exit();
                    }
                }
            }
        }
    }

    // redisplay continuously, one frame per vblank with vsync on
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        self.request_redraw();
    }
}

impl<A: RoboApp> Runner<A> {
    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

pub(crate) fn run_internal<A: RoboApp + 'static>(config: AppConfig, app: A) -> anyhow::Result<()> {
    let mut runner = Runner::new(app, config);
    let event_loop = EventLoop::new().map_err(AppError::from)?;
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run_app(&mut runner).map_err(AppError::from)?;
    match runner.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
