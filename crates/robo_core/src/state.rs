//! Application state driven by explicit events.
//!
//! The shell owns one [`SceneState`] and feeds it [`SceneEvent`]s in the order
//! they arrive; there is no process-wide mutable state.

use crate::arm::ArmAngles;
use crate::camera::OrbitCamera;
use crate::controller::{KeyboardController, SpecialKey};
use crate::kinematics::ArmModel;
use crate::projection::{reshape, Projection, Viewport};
use crate::scene::{compose_frame, DrawList, SceneLayout};

/// Input to [`SceneState::handle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneEvent {
    /// A character key was pressed (or auto-repeated).
    Key(char),
    /// A non-character key was pressed (or auto-repeated).
    SpecialKey(SpecialKey),
    /// The window now measures `width × height` physical pixels.
    Resize { width: u32, height: u32 },
    /// The shell is about to draw a frame.
    Redraw,
}

/// Everything the viewer mutates at runtime.
#[derive(Debug, Clone)]
pub struct SceneState {
    pub camera: OrbitCamera,
    pub arm: ArmAngles,
    pub controller: KeyboardController,
    pub model: ArmModel,
    pub layout: SceneLayout,
    viewport: Viewport,
    projection: Projection,
}

impl SceneState {
    /// Default camera, neutral arm, default key bindings, sized for a
    /// `width × height` window.
    pub fn new(width: u32, height: u32) -> Self {
        let (viewport, projection) = reshape(width, height);
        Self {
            camera: OrbitCamera::default(),
            arm: ArmAngles::new(),
            controller: KeyboardController::with_default_bindings(),
            model: ArmModel::default(),
            layout: SceneLayout::default(),
            viewport,
            projection,
        }
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Applies one event.  Returns `true` when the visible frame changed and
    /// a redraw should be scheduled.
    pub fn handle(&mut self, event: &SceneEvent) -> bool {
        match *event {
            SceneEvent::Key(key) => self.controller.key_press(key, &mut self.camera, &mut self.arm),
            SceneEvent::SpecialKey(key) => {
                self.controller
                    .special_key_press(key, &mut self.camera, &mut self.arm)
            }
            SceneEvent::Resize { width, height } => {
                log::info!("width: {width} height: {height}");
                let (viewport, projection) = reshape(width, height);
                self.viewport = viewport;
                self.projection = projection;
                true
            }
            SceneEvent::Redraw => false,
        }
    }

    /// The draw list for the current state.
    pub fn compose(&self) -> DrawList {
        compose_frame(
            &self.camera,
            &self.arm,
            &self.model,
            &self.layout,
            self.viewport,
            &self.projection,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arm::Joint;

    #[test]
    fn resize_recomputes_projection_and_viewport() {
        let mut state = SceneState::new(800, 600);
        assert!(state.handle(&SceneEvent::Resize { width: 1024, height: 768 }));
        assert_eq!(state.viewport(), Viewport::full(1024, 768));
        assert_eq!(state.projection().aspect, 1024.0 / 768.0);
        assert_eq!(state.compose().viewport, Viewport::full(1024, 768));
    }

    #[test]
    fn keys_reach_camera_and_arm() {
        let mut state = SceneState::new(800, 600);
        assert!(state.handle(&SceneEvent::Key('e')));
        assert!(state.handle(&SceneEvent::SpecialKey(SpecialKey::Left)));
        assert_eq!(state.arm.get(Joint::Elbow), 5.0);
        assert_eq!(state.camera.yaw, OrbitCamera::default().yaw - 5.0);
    }

    #[test]
    fn unknown_and_redraw_events_are_inert() {
        let mut state = SceneState::new(800, 600);
        let before = (state.camera, state.arm, state.viewport());
        assert!(!state.handle(&SceneEvent::Key('z')));
        assert!(!state.handle(&SceneEvent::SpecialKey(SpecialKey::F(5))));
        assert!(!state.handle(&SceneEvent::Redraw));
        assert_eq!((state.camera, state.arm, state.viewport()), before);
    }

    #[test]
    fn compose_uses_current_projection() {
        let state = SceneState::new(640, 480);
        let list = state.compose();
        assert_eq!(list.projection, state.projection().matrix());
        assert!(!list.is_empty());
    }
}
