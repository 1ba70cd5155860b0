//! Image file → GPU texture.
//!
//! Textures are uploaded once at startup as `Rgba8UnormSrgb`, sampled with
//! repeat addressing on both axes and nearest-neighbour filtering with no
//! mip chain, so texels stay blocky up close.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use thiserror::Error;

/// Why a texture could not be loaded.  Fatal at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("texture file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read texture {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode texture {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("texture {} has no pixels", path.display())]
    EmptyImage { path: PathBuf },
}

/// A GPU-resident image plus the sampler it is drawn with.
///
/// Created once, never mutated; dropping it releases the GPU memory.
pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    pub width: u32,
    pub height: u32,
}

impl Texture {
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

    /// Uploads already-decoded pixels.
    pub fn from_image(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &RgbaImage,
        label: &str,
    ) -> Self {
        let (width, height) = image.dimensions();
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            image.as_raw(),
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&sampler_descriptor(label));

        Self {
            texture,
            view,
            sampler,
            width,
            height,
        }
    }
}

/// Repeat on both axes, nearest-neighbour for minification and
/// magnification, no mip-mapping.
pub fn sampler_descriptor(label: &str) -> wgpu::SamplerDescriptor<'_> {
    wgpu::SamplerDescriptor {
        label: Some(label),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Nearest,
        min_filter: wgpu::FilterMode::Nearest,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    }
}

/// Reads and decodes an image file in any format the `image` crate was built
/// with, converting it to 8-bit RGBA.
pub fn decode_image(path: &Path) -> Result<RgbaImage, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let image = image::load_from_memory(&bytes)
        .map_err(|source| LoadError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();

    if image.width() == 0 || image.height() == 0 {
        return Err(LoadError::EmptyImage {
            path: path.to_path_buf(),
        });
    }
    Ok(image)
}

/// Loads `path` and uploads it as a 2-D texture.
pub fn load_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    path: impl AsRef<Path>,
) -> Result<Texture, LoadError> {
    let path = path.as_ref();
    let image = decode_image(path)?;
    let label = path.display().to_string();
    let texture = Texture::from_image(device, queue, &image, &label);
    log::info!(
        "loaded texture {} ({}x{})",
        label,
        texture.width,
        texture.height
    );
    Ok(texture)
}
