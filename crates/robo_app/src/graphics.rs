use std::sync::Arc;

use robo_core::DrawList;
use robo_renderer::{EngineContext, Renderer};
use winit::window::Window;

use crate::error::AppError;

/// The window surface plus the renderer drawing into it.
pub struct GraphicsState {
    pub surface: wgpu::Surface<'static>,
    pub config: wgpu::SurfaceConfiguration,
    pub renderer: Renderer,
}

impl GraphicsState {
    pub async fn new(window: Arc<Window>, width: u32, height: u32, vsync: bool) -> anyhow::Result<Self> {
        let instance = EngineContext::instance();
        let surface = instance
            .create_surface(window)
            .map_err(|e| AppError::Surface(e.to_string()))?;
        let context = EngineContext::new_with_instance(instance, Some(&surface)).await?;

        let caps = surface.get_capabilities(&context.adapter);
        let format = pick_format(&caps.formats)
            .ok_or_else(|| AppError::Surface("surface is not supported by the adapter".into()))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: present_mode(vsync),
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 1,
        };
        surface.configure(&context.device, &config);
        log::debug!("surface configured: {:?} {}x{}", format, config.width, config.height);

        let renderer = Renderer::new(context, config.width, config.height, config.format);

        Ok(Self {
            surface,
            config,
            renderer,
        })
    }

    /// Reconfigures for a new window size.  Zero sizes (minimised) are
    /// skipped; the last configuration stays valid until the window returns.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.config.width = width;
            self.config.height = height;
            self.reconfigure();
            self.renderer.resize(width, height);
        }
    }

    fn reconfigure(&self) {
        self.surface.configure(&self.renderer.context.device, &self.config);
    }

    /// Acquires the next swapchain frame, records `list` into it and presents.
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped;
    /// running out of memory is fatal.
    pub fn render(&mut self, list: &DrawList) -> Result<(), AppError> {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("surface lost or outdated; reconfiguring");
                self.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                return Err(AppError::Surface("out of memory acquiring frame".into()));
            }
            Err(other) => {
                log::warn!("skipping frame: {other}");
                return Ok(());
            }
        };

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.renderer.begin_frame();
        self.renderer.render(&mut encoder, &view, list);
        self.renderer.context.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// First sRGB format, else whatever the surface prefers.
fn pick_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| formats.first().copied())
}

fn present_mode(vsync: bool) -> wgpu::PresentMode {
    if vsync {
        wgpu::PresentMode::Fifo
    } else {
        wgpu::PresentMode::AutoNoVsync
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::TextureFormat;

    #[test]
    fn prefers_srgb() {
        let formats = [TextureFormat::Bgra8Unorm, TextureFormat::Bgra8UnormSrgb];
        assert_eq!(pick_format(&formats), Some(TextureFormat::Bgra8UnormSrgb));
    }

    #[test]
    fn falls_back_to_first_format() {
        assert_eq!(pick_format(&[TextureFormat::Rgba16Float]), Some(TextureFormat::Rgba16Float));
        assert_eq!(pick_format(&[]), None);
    }

    #[test]
    fn vsync_selects_fifo() {
        assert_eq!(present_mode(true), wgpu::PresentMode::Fifo);
        assert_eq!(present_mode(false), wgpu::PresentMode::AutoNoVsync);
    }
}
