//! Orbit camera: yaw/pitch/distance around a fixed target point.
//!
//! Angles are stored in degrees because that is what the keyboard steps and
//! the on-screen debug output use; they are converted to radians only when the
//! eye position is computed.

use glam::{Mat4, Vec3};

use crate::matrix_stack::MatrixStack;

/// Camera that orbits `target` at `distance`, looking at it with +Y up.
///
/// The eye position is a pure function of the four fields:
///
/// ```text
/// eye = target + distance * (cos(pitch)·sin(yaw), sin(pitch), cos(pitch)·cos(yaw))
/// ```
///
/// so `yaw = 0, pitch = 0` places the eye on the +Z axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Rotation around the target in the XZ plane, degrees in `[0, 360)`.
    pub yaw: f32,
    /// Elevation above the XZ plane, degrees in `[-PITCH_LIMIT, PITCH_LIMIT]`.
    pub pitch: f32,
    /// Eye distance from `target`, always within `[MIN_DISTANCE, MAX_DISTANCE]`.
    pub distance: f32,
    pub target: Vec3,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 30.0,
            pitch: 25.0,
            distance: 10.0,
            target: Vec3::ZERO,
        }
    }
}

impl OrbitCamera {
    /// Pitch is kept away from ±90° so the view never flips over the pole.
    pub const PITCH_LIMIT: f32 = 89.0;
    pub const MIN_DISTANCE: f32 = 1.0;
    /// Stays well inside the projection's far plane (30 units).
    pub const MAX_DISTANCE: f32 = 25.0;

    /// Builds a camera from raw values, normalising them into the valid ranges.
    pub fn new(yaw: f32, pitch: f32, distance: f32, target: Vec3) -> Self {
        let mut camera = Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: Self::MIN_DISTANCE,
            target,
        };
        camera.adjust_yaw(yaw);
        camera.adjust_pitch(pitch);
        camera.distance = sanitize_distance(distance);
        camera
    }

    /// Rotates around the target; the result wraps into `[0, 360)`.
    pub fn adjust_yaw(&mut self, delta: f32) {
        let yaw = (self.yaw + delta).rem_euclid(360.0);
        if !yaw.is_finite() {
            return;
        }
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs
        self.yaw = if yaw >= 360.0 { 0.0 } else { yaw };
    }

    /// Tilts the camera; saturates at `±PITCH_LIMIT`.
    pub fn adjust_pitch(&mut self, delta: f32) {
        let pitch = self.pitch + delta;
        if pitch.is_nan() {
            return;
        }
        self.pitch = pitch.clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
    }

    /// Moves the eye towards (negative delta) or away from the target.
    pub fn adjust_distance(&mut self, delta: f32) {
        let distance = self.distance + delta;
        if distance.is_nan() {
            return;
        }
        self.distance = distance.clamp(Self::MIN_DISTANCE, Self::MAX_DISTANCE);
    }

    /// Unit vector from the target towards the eye.
    pub fn direction(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.to_radians().sin_cos();
        Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }

    /// World-space eye position derived from yaw, pitch, distance and target.
    pub fn eye(&self) -> Vec3 {
        self.target + self.direction() * self.distance
    }

    /// Right-handed view matrix looking from `eye()` to `target` with +Y up.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    /// Multiplies the view transform onto the top of `stack`, the way
    /// `gluLookAt` configures the model-view matrix.
    pub fn look_at(&self, stack: &mut MatrixStack) {
        stack.mult(self.view_matrix());
    }
}

fn sanitize_distance(distance: f32) -> f32 {
    if distance.is_nan() {
        OrbitCamera::MIN_DISTANCE
    } else {
        distance.clamp(OrbitCamera::MIN_DISTANCE, OrbitCamera::MAX_DISTANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eye_on_positive_z_at_zero_angles() {
        let camera = OrbitCamera::new(0.0, 0.0, 5.0, Vec3::ZERO);
        assert!(camera.eye().abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), 1e-5));
    }

    #[test]
    fn eye_follows_yaw_and_pitch() {
        let camera = OrbitCamera::new(90.0, 0.0, 2.0, Vec3::new(1.0, 0.0, 0.0));
        assert!(camera.eye().abs_diff_eq(Vec3::new(3.0, 0.0, 0.0), 1e-5));

        let camera = OrbitCamera::new(0.0, 89.0, 3.0, Vec3::ZERO);
        assert!(camera.eye().y > 2.99);
    }

    #[test]
    fn yaw_wraps() {
        let mut camera = OrbitCamera::new(350.0, 0.0, 5.0, Vec3::ZERO);
        camera.adjust_yaw(15.0);
        assert!((camera.yaw - 5.0).abs() < 1e-4);
        camera.adjust_yaw(-10.0);
        assert!((camera.yaw - 355.0).abs() < 1e-4);
        camera.adjust_yaw(-1e-7);
        assert!(camera.yaw >= 0.0 && camera.yaw < 360.0);
    }

    #[test]
    fn pitch_and_distance_stay_in_range() {
        let mut camera = OrbitCamera::default();
        for step in [5.0, 50.0, 500.0, -1000.0, 3.0, -7.5, f32::MAX, f32::MIN] {
            camera.adjust_pitch(step);
            camera.adjust_distance(step);
            assert!(camera.pitch.abs() <= OrbitCamera::PITCH_LIMIT);
            assert!(camera.distance > 0.0);
            assert!(camera.distance >= OrbitCamera::MIN_DISTANCE);
            assert!(camera.distance <= OrbitCamera::MAX_DISTANCE);
        }
    }

    #[test]
    fn saturates_at_bounds() {
        let mut camera = OrbitCamera::new(0.0, 89.0, 1.0, Vec3::ZERO);
        camera.adjust_pitch(5.0);
        camera.adjust_distance(-0.5);
        assert_eq!(camera.pitch, OrbitCamera::PITCH_LIMIT);
        assert_eq!(camera.distance, OrbitCamera::MIN_DISTANCE);
    }

    #[test]
    fn look_at_matches_view_matrix() {
        let camera = OrbitCamera::default();
        let mut stack = MatrixStack::new();
        camera.look_at(&mut stack);
        assert!(stack.top().abs_diff_eq(camera.view_matrix(), 1e-6));
        // the target projects onto the view axis at -distance
        let p = stack.top().transform_point3(camera.target);
        assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, -camera.distance), 1e-4));
    }
}
