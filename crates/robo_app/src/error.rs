use thiserror::Error;

/// Failures of the window / surface layer.  GPU device and texture errors
/// come from `robo_renderer` and travel as `anyhow::Error`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("window creation failed: {0}")]
    Window(String),
    #[error("surface error: {0}")]
    Surface(String),
}
