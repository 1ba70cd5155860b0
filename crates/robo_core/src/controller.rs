//! Keyboard bindings: one action per character or special key, looked up
//! when a key is pressed and applied to the camera or the arm.

use std::collections::HashMap;

use crate::arm::{ArmAngles, Joint};
use crate::camera::OrbitCamera;

/// Non-character keys the viewer reacts to.
///
/// The shell maps its toolkit's named keys onto this enum so the binding table
/// stays independent of the windowing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialKey {
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Insert,
    F(u8),
}

/// What a bound key does when pressed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyAction {
    /// Add degrees to the camera yaw.
    Yaw(f32),
    /// Add degrees to the camera pitch.
    Pitch(f32),
    /// Add world units to the camera distance (negative zooms in).
    Zoom(f32),
    /// Add degrees to one joint.
    Joint(Joint, f32),
    /// Put every joint back at 0°.
    ResetArm,
    /// Restore the default camera.
    ResetCamera,
}

impl KeyAction {
    /// Applies the action.  Every mutation goes through the saturating
    /// mutators of the target, so no action can break a range invariant.
    pub fn apply(&self, camera: &mut OrbitCamera, arm: &mut ArmAngles) {
        match *self {
            KeyAction::Yaw(delta) => camera.adjust_yaw(delta),
            KeyAction::Pitch(delta) => camera.adjust_pitch(delta),
            KeyAction::Zoom(delta) => camera.adjust_distance(delta),
            KeyAction::Joint(joint, delta) => arm.adjust(joint, delta),
            KeyAction::ResetArm => arm.reset(),
            KeyAction::ResetCamera => *camera = OrbitCamera::default(),
        }
    }
}

/// Maps key presses to camera and arm mutations.
///
/// Default table (see [`KeyboardController::with_default_bindings`]):
///
/// | Key                 | Action                    |
/// |---------------------|---------------------------|
/// | Left / Right        | yaw −5° / +5°             |
/// | Up / Down           | pitch +5° / −5°           |
/// | `+` or `=` / `-`    | distance −0.5 / +0.5      |
/// | PageUp / PageDown   | distance −0.5 / +0.5      |
/// | `q` / `a`           | base +5° / −5°            |
/// | `w` / `s`           | shoulder +5° / −5°        |
/// | `e` / `d`           | elbow +5° / −5°           |
/// | `r` / `f`           | wrist +5° / −5°           |
/// | `t` / `g`           | claw open +5° / close −5° |
/// | `0`                 | neutral arm pose          |
/// | Home                | default camera            |
///
/// Letters are matched case-insensitively.  Unbound keys do nothing.
///
/// # Example
/// ```rust
/// use robo_core::{ArmAngles, Joint, KeyAction, KeyboardController, OrbitCamera};
///
/// let mut controller = KeyboardController::with_default_bindings();
/// // finer elbow control on 'e'
/// controller.bind_char('e', KeyAction::Joint(Joint::Elbow, 1.0));
///
/// let mut camera = OrbitCamera::default();
/// let mut arm = ArmAngles::new();
/// controller.key_press('E', &mut camera, &mut arm);
/// assert_eq!(arm.elbow(), 1.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeyboardController {
    chars: HashMap<char, KeyAction>,
    specials: HashMap<SpecialKey, KeyAction>,
}

impl KeyboardController {
    /// Step for camera yaw/pitch, degrees.
    pub const ANGLE_STEP: f32 = 5.0;
    /// Step for camera distance, world units.
    pub const ZOOM_STEP: f32 = 0.5;
    /// Step for every joint, degrees.
    pub const JOINT_STEP: f32 = 5.0;

    /// Creates an empty controller with no key bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// The documented default layout.
    pub fn with_default_bindings() -> Self {
        let mut ctl = Self::new();

        ctl.bind_special(SpecialKey::Left, KeyAction::Yaw(-Self::ANGLE_STEP));
        ctl.bind_special(SpecialKey::Right, KeyAction::Yaw(Self::ANGLE_STEP));
        ctl.bind_special(SpecialKey::Up, KeyAction::Pitch(Self::ANGLE_STEP));
        ctl.bind_special(SpecialKey::Down, KeyAction::Pitch(-Self::ANGLE_STEP));
        ctl.bind_special(SpecialKey::PageUp, KeyAction::Zoom(-Self::ZOOM_STEP));
        ctl.bind_special(SpecialKey::PageDown, KeyAction::Zoom(Self::ZOOM_STEP));
        ctl.bind_special(SpecialKey::Home, KeyAction::ResetCamera);

        ctl.bind_char('+', KeyAction::Zoom(-Self::ZOOM_STEP));
        ctl.bind_char('=', KeyAction::Zoom(-Self::ZOOM_STEP));
        ctl.bind_char('-', KeyAction::Zoom(Self::ZOOM_STEP));
        ctl.bind_char('0', KeyAction::ResetArm);

        let joint_keys = [
            (Joint::Base, 'q', 'a'),
            (Joint::Shoulder, 'w', 's'),
            (Joint::Elbow, 'e', 'd'),
            (Joint::Wrist, 'r', 'f'),
            (Joint::Claw, 't', 'g'),
        ];
        for (joint, up, down) in joint_keys {
            ctl.bind_char(up, KeyAction::Joint(joint, Self::JOINT_STEP));
            ctl.bind_char(down, KeyAction::Joint(joint, -Self::JOINT_STEP));
        }
        ctl
    }

    /// Binds a character key.  Letters are stored lower-case; binding the
    /// same key twice overwrites the old binding.
    pub fn bind_char(&mut self, key: char, action: KeyAction) {
        self.chars.insert(normalize(key), action);
    }

    pub fn bind_special(&mut self, key: SpecialKey, action: KeyAction) {
        self.specials.insert(key, action);
    }

    /// Removes the binding for a character key, if any.
    pub fn unbind_char(&mut self, key: char) {
        self.chars.remove(&normalize(key));
    }

    pub fn unbind_special(&mut self, key: SpecialKey) {
        self.specials.remove(&key);
    }

    /// Removes all key bindings.
    pub fn clear_bindings(&mut self) {
        self.chars.clear();
        self.specials.clear();
    }

    /// The action bound to a character key.
    pub fn char_action(&self, key: char) -> Option<KeyAction> {
        self.chars.get(&normalize(key)).copied()
    }

    pub fn special_action(&self, key: SpecialKey) -> Option<KeyAction> {
        self.specials.get(&key).copied()
    }

    /// Dispatches a character key.  Returns `true` if a binding fired.
    pub fn key_press(&self, key: char, camera: &mut OrbitCamera, arm: &mut ArmAngles) -> bool {
        match self.char_action(key) {
            Some(action) => {
                log::debug!("key {key:?} -> {action:?}");
                action.apply(camera, arm);
                true
            }
            None => {
                log::trace!("unbound key {key:?}");
                false
            }
        }
    }

    /// Dispatches a special key.  Returns `true` if a binding fired.
    pub fn special_key_press(
        &self,
        key: SpecialKey,
        camera: &mut OrbitCamera,
        arm: &mut ArmAngles,
    ) -> bool {
        match self.special_action(key) {
            Some(action) => {
                log::debug!("special key {key:?} -> {action:?}");
                action.apply(camera, arm);
                true
            }
            None => {
                log::trace!("unbound special key {key:?}");
                false
            }
        }
    }
}

fn normalize(key: char) -> char {
    key.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> (KeyboardController, OrbitCamera, ArmAngles) {
        (
            KeyboardController::with_default_bindings(),
            OrbitCamera::default(),
            ArmAngles::new(),
        )
    }

    #[test]
    fn joint_keys_step_each_joint() {
        let (ctl, mut camera, mut arm) = fresh();
        for key in ['q', 'w', 'e', 'r', 't'] {
            assert!(ctl.key_press(key, &mut camera, &mut arm));
        }
        for joint in Joint::ALL {
            assert_eq!(arm.get(joint), 5.0, "{joint}");
        }
        for key in ['a', 's', 'd', 'f', 'g'] {
            ctl.key_press(key, &mut camera, &mut arm);
        }
        assert_eq!(arm, ArmAngles::new());
        assert_eq!(camera, OrbitCamera::default());
    }

    #[test]
    fn letters_are_case_insensitive() {
        let (ctl, mut camera, mut arm) = fresh();
        ctl.key_press('W', &mut camera, &mut arm);
        assert_eq!(arm.shoulder(), 5.0);
    }

    #[test]
    fn arrows_move_camera() {
        let (ctl, mut camera, mut arm) = fresh();
        let start = camera;
        ctl.special_key_press(SpecialKey::Right, &mut camera, &mut arm);
        assert_eq!(camera.yaw, start.yaw + 5.0);
        ctl.special_key_press(SpecialKey::Up, &mut camera, &mut arm);
        assert_eq!(camera.pitch, start.pitch + 5.0);
        ctl.key_press('+', &mut camera, &mut arm);
        assert_eq!(camera.distance, start.distance - 0.5);
        ctl.special_key_press(SpecialKey::Home, &mut camera, &mut arm);
        assert_eq!(camera, start);
    }

    #[test]
    fn unbound_keys_change_nothing() {
        let (ctl, mut camera, mut arm) = fresh();
        ctl.key_press('w', &mut camera, &mut arm);
        ctl.special_key_press(SpecialKey::Left, &mut camera, &mut arm);
        let (camera_before, arm_before) = (camera, arm);

        for key in ['z', 'x', '9', ' ', '\u{e9}', '\n'] {
            assert!(!ctl.key_press(key, &mut camera, &mut arm));
        }
        for key in [SpecialKey::End, SpecialKey::Insert, SpecialKey::F(1)] {
            assert!(!ctl.special_key_press(key, &mut camera, &mut arm));
        }
        assert_eq!(camera.yaw.to_bits(), camera_before.yaw.to_bits());
        assert_eq!(camera.pitch.to_bits(), camera_before.pitch.to_bits());
        assert_eq!(camera.distance.to_bits(), camera_before.distance.to_bits());
        assert_eq!(camera.target, camera_before.target);
        assert_eq!(arm.as_array().map(f32::to_bits), arm_before.as_array().map(f32::to_bits));
    }

    #[test]
    fn dispatch_is_deterministic() {
        let (ctl, camera, arm) = fresh();
        let keys = "qqwwe+-rtgaq";
        let run = || {
            let (mut c, mut a) = (camera, arm);
            for key in keys.chars() {
                ctl.key_press(key, &mut c, &mut a);
            }
            (c, a)
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn rebinding_overrides_default() {
        let (mut ctl, mut camera, mut arm) = fresh();
        ctl.bind_char('Q', KeyAction::Joint(Joint::Base, 1.0));
        ctl.key_press('q', &mut camera, &mut arm);
        assert_eq!(arm.base(), 1.0);
        ctl.unbind_char('q');
        assert!(!ctl.key_press('q', &mut camera, &mut arm));
        ctl.clear_bindings();
        assert!(!ctl.special_key_press(SpecialKey::Left, &mut camera, &mut arm));
    }

    #[test]
    fn zero_resets_pose() {
        let (ctl, mut camera, mut arm) = fresh();
        ctl.key_press('e', &mut camera, &mut arm);
        ctl.key_press('0', &mut camera, &mut arm);
        assert_eq!(arm, ArmAngles::new());
    }
}
