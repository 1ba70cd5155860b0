//! Window-size dependent state: the viewport rectangle and the perspective
//! projection recomputed on every reshape.

use glam::Mat4;

/// Rectangular region of the window used for rendering, in physical pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Viewport covering a whole `width × height` window.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Perspective projection parameters.  `fovy` is in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projection {
    pub fovy: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self::for_size(800, 600)
    }
}

impl Projection {
    pub const FOVY_DEGREES: f32 = 70.0;
    pub const ZNEAR: f32 = 0.1;
    pub const ZFAR: f32 = 30.0;

    /// Projection for a window of the given size.  A zero height is treated
    /// as one pixel so the aspect ratio stays finite while minimised.
    pub fn for_size(width: u32, height: u32) -> Self {
        Self {
            fovy: Self::FOVY_DEGREES,
            aspect: width.max(1) as f32 / height.max(1) as f32,
            znear: Self::ZNEAR,
            zfar: Self::ZFAR,
        }
    }

    /// Right-handed perspective matrix with a 0..1 depth range.
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy.to_radians(), self.aspect, self.znear, self.zfar)
    }
}

/// Recomputes viewport and projection after the window changed size.
pub fn reshape(width: u32, height: u32) -> (Viewport, Projection) {
    (Viewport::full(width, height), Projection::for_size(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reshape_covers_window() {
        let (viewport, projection) = reshape(1024, 768);
        assert_eq!(viewport, Viewport { x: 0, y: 0, width: 1024, height: 768 });
        assert_eq!(projection.aspect, 1024.0 / 768.0);
        assert_eq!(projection.fovy, 70.0);
        assert_eq!(projection.znear, 0.1);
        assert_eq!(projection.zfar, 30.0);
    }

    #[test]
    fn zero_height_keeps_aspect_finite() {
        let (viewport, projection) = reshape(640, 0);
        assert!(viewport.is_empty());
        assert!(projection.aspect.is_finite());
    }

    #[test]
    fn near_plane_maps_to_zero_depth() {
        let m = Projection::for_size(800, 600).matrix();
        let near = m.project_point3(glam::Vec3::new(0.0, 0.0, -0.1));
        let far = m.project_point3(glam::Vec3::new(0.0, 0.0, -30.0));
        assert!(near.z.abs() < 1e-4);
        assert!((far.z - 1.0).abs() < 1e-4);
    }
}
