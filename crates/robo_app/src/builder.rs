use log::LevelFilter;

use crate::traits::RoboApp;

/// Initial window and engine settings.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Outer window position in physical pixels; `None` lets the window
    /// manager decide.
    pub position: Option<(i32, i32)>,
    pub resizable: bool,
    pub vsync: bool,
    /// RGBA clear colour of every frame.
    pub clear_color: [f64; 4],
    /// Overridden by `ROBO_LOG` when that is set to a valid level.
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Braco Robotico".to_string(),
            width: 800,
            height: 600,
            position: Some((400, 400)),
            resizable: true,
            vsync: true,
            clear_color: [0.07, 0.13, 0.17, 1.0],
            log_level: LevelFilter::Info,
        }
    }
}

/// Entry point.  Configure with the builder methods, then call [`App::run`].
pub struct App<A: RoboApp> {
    config: AppConfig,
    app_state: A,
}

impl<A: RoboApp + 'static> App<A> {
    pub fn new(app_state: A) -> Self {
        Self {
            config: AppConfig::default(),
            app_state,
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.config.title = title.to_string();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.config.position = Some((x, y));
        self
    }

    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.config.resizable = resizable;
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.config.vsync = vsync;
        self
    }

    pub fn with_clear_color(mut self, rgba: [f64; 4]) -> Self {
        self.config.clear_color = rgba;
        self
    }

    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.config.log_level = level;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Installs logging, opens the window and runs the event loop until the
    /// window closes.  A setup or surface failure ends the loop and is
    /// returned here.
    pub fn run(self) -> anyhow::Result<()> {
        let level = crate::logging::effective_level(
            self.config.log_level,
            std::env::var(crate::logging::LOG_ENV).ok().as_deref(),
        );
        if crate::logging::init(level).is_err() {
            log::debug!("a logger was already installed; keeping it");
        }
        crate::runner::run_internal(self.config, self.app_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::AppContext;
    use robo_core::{DrawList, Viewport};

    struct Nothing;

    impl RoboApp for Nothing {
        fn draw(&mut self, ctx: &mut AppContext) -> DrawList {
            DrawList::new(Viewport::full(ctx.width(), ctx.height()), robo_core::glam::Mat4::IDENTITY)
        }
    }

    #[test]
    fn defaults_match_the_viewer_window() {
        let c = AppConfig::default();
        assert_eq!(c.title, "Braco Robotico");
        assert_eq!((c.width, c.height), (800, 600));
        assert_eq!(c.position, Some((400, 400)));
        assert!(c.resizable);
        assert_eq!(c.clear_color, [0.07, 0.13, 0.17, 1.0]);
        assert_eq!(c.log_level, LevelFilter::Info);
    }

    #[test]
    fn builder_overrides_fields() {
        let app = App::new(Nothing)
            .with_title("arm")
            .with_size(1024, 768)
            .with_position(10, 20)
            .with_resizable(false)
            .with_vsync(false)
            .with_clear_color([0.0, 0.0, 0.0, 1.0])
            .with_log_level(LevelFilter::Debug);
        let c = app.config();
        assert_eq!(c.title, "arm");
        assert_eq!((c.width, c.height), (1024, 768));
        assert_eq!(c.position, Some((10, 20)));
        assert!(!c.resizable);
        assert!(!c.vsync);
        assert_eq!(c.clear_color, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(c.log_level, LevelFilter::Debug);
    }

    #[test]
    fn with_config_replaces_everything() {
        let custom = AppConfig {
            title: "x".into(),
            position: None,
            ..AppConfig::default()
        };
        let app = App::new(Nothing).with_config(custom.clone());
        assert_eq!(app.config(), &custom);
    }
}
