//! Joint angles of the robotic arm.
//!
//! Every joint has its own mechanical range; mutators saturate silently at the
//! bounds so any sequence of key presses leaves the arm in a valid pose.

use std::fmt;

/// The revolute joints of the arm, ordered from the root of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joint {
    Base,
    Shoulder,
    Elbow,
    Wrist,
    Claw,
}

impl Joint {
    /// All joints in parent-to-child order.
    pub const ALL: [Joint; 5] = [
        Joint::Base,
        Joint::Shoulder,
        Joint::Elbow,
        Joint::Wrist,
        Joint::Claw,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Mechanical range of the joint, in degrees.
    pub fn range(self) -> JointRange {
        match self {
            Joint::Base => JointRange::new(-180.0, 180.0),
            Joint::Shoulder => JointRange::new(-90.0, 90.0),
            Joint::Elbow => JointRange::new(-135.0, 135.0),
            Joint::Wrist => JointRange::new(-90.0, 90.0),
            // opening of the fingers; 0 is closed
            Joint::Claw => JointRange::new(0.0, 45.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Joint::Base => "base",
            Joint::Shoulder => "shoulder",
            Joint::Elbow => "elbow",
            Joint::Wrist => "wrist",
            Joint::Claw => "claw",
        }
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive `[min, max]` interval in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointRange {
    pub min: f32,
    pub max: f32,
}

impl JointRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Current angle of every joint, in degrees.
///
/// Created in the neutral pose (all zeros); mutated only through the
/// saturating mutators below.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ArmAngles {
    angles: [f32; 5],
}

impl ArmAngles {
    /// Neutral pose: every joint at 0°.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current angle of `joint`.
    #[inline]
    pub fn get(&self, joint: Joint) -> f32 {
        self.angles[joint.index()]
    }

    /// Sets `joint` to `degrees`, clamped into the joint's range.
    pub fn set(&mut self, joint: Joint, degrees: f32) {
        if degrees.is_nan() {
            return;
        }
        self.angles[joint.index()] = joint.range().clamp(degrees);
    }

    /// Applies a signed delta to `joint`, saturating at its bounds.
    pub fn adjust(&mut self, joint: Joint, delta: f32) {
        self.set(joint, self.get(joint) + delta);
    }

    /// Returns every joint to 0°.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Angles in parent-to-child order.
    pub fn as_array(&self) -> [f32; 5] {
        self.angles
    }

    pub fn rotate_base(&mut self, delta: f32) {
        self.adjust(Joint::Base, delta);
    }

    pub fn rotate_shoulder(&mut self, delta: f32) {
        self.adjust(Joint::Shoulder, delta);
    }

    pub fn rotate_elbow(&mut self, delta: f32) {
        self.adjust(Joint::Elbow, delta);
    }

    pub fn rotate_wrist(&mut self, delta: f32) {
        self.adjust(Joint::Wrist, delta);
    }

    pub fn open_claw(&mut self, delta: f32) {
        self.adjust(Joint::Claw, delta);
    }

    pub fn base(&self) -> f32 {
        self.get(Joint::Base)
    }

    pub fn shoulder(&self) -> f32 {
        self.get(Joint::Shoulder)
    }

    pub fn elbow(&self) -> f32 {
        self.get(Joint::Elbow)
    }

    pub fn wrist(&self) -> f32 {
        self.get(Joint::Wrist)
    }

    pub fn claw(&self) -> f32 {
        self.get(Joint::Claw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_neutral() {
        let arm = ArmAngles::new();
        for joint in Joint::ALL {
            assert_eq!(arm.get(joint), 0.0);
        }
    }

    #[test]
    fn every_joint_stays_in_range() {
        let mut arm = ArmAngles::new();
        let deltas = [5.0, -5.0, 90.0, -720.0, 1e6, -1e6, 0.25, f32::INFINITY];
        for joint in Joint::ALL {
            for (i, delta) in deltas.iter().cycle().take(64).enumerate() {
                arm.adjust(joint, *delta * (i as f32 % 3.0 - 1.0));
                assert!(joint.range().contains(arm.get(joint)), "{joint} escaped");
            }
        }
    }

    #[test]
    fn saturates_idempotently_at_max() {
        let mut arm = ArmAngles::new();
        for _ in 0..100 {
            arm.rotate_shoulder(5.0);
        }
        assert_eq!(arm.shoulder(), 90.0);
        let before = arm;
        arm.rotate_shoulder(5.0);
        assert_eq!(arm, before);
    }

    #[test]
    fn claw_cannot_close_past_zero() {
        let mut arm = ArmAngles::new();
        arm.open_claw(-5.0);
        assert_eq!(arm.claw(), 0.0);
        arm.open_claw(10.0);
        assert_eq!(arm.claw(), 10.0);
    }

    #[test]
    fn nan_delta_is_ignored() {
        let mut arm = ArmAngles::new();
        arm.rotate_elbow(15.0);
        arm.rotate_elbow(f32::NAN);
        assert_eq!(arm.elbow(), 15.0);
    }

    #[test]
    fn reset_returns_to_neutral() {
        let mut arm = ArmAngles::new();
        arm.rotate_base(30.0);
        arm.rotate_wrist(-40.0);
        arm.reset();
        assert_eq!(arm, ArmAngles::new());
    }
}
