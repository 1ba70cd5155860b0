//! Kinematic chain of the arm: fixed link geometry plus the per-frame
//! cumulative transforms derived from [`ArmAngles`].
//!
//! Each segment contributes
//!
//! ```text
//! local = translate(offset) · rotate(angle, axis) · translate(length · Y)
//! ```
//!
//! and segment `i` inherits everything applied by segments `0..i`.  The rest
//! axis of every link is +Y, so with all angles at 0° the arm stands straight
//! up and every world transform is a pure translation.

use glam::{Mat4, Vec3};

use crate::arm::{ArmAngles, Joint};
use crate::matrix_stack::MatrixStack;

/// Fixed geometry of one rigid link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub joint: Joint,
    /// Rotation axis in the parent's frame.
    pub axis: Vec3,
    /// Translation from the end of the parent link to this joint.
    pub offset: Vec3,
    /// Link length along the local +Y axis.
    pub length: f32,
    /// Box drawn for the link (`size.y` usually equals `length`).
    pub size: Vec3,
    /// Drawn a second time reflected across the parent's YZ plane with the
    /// angle negated (the second claw finger).
    pub mirrored: bool,
}

impl Segment {
    /// Post-multiplies `translate(offset) · rotate(angle)`; the stack is left
    /// at the joint origin, ready for drawing the link geometry.
    pub fn apply_joint(&self, stack: &mut MatrixStack, degrees: f32) {
        stack.translate(self.offset);
        stack.rotate_degrees(degrees, self.axis);
    }

    /// Geometry placement relative to the joint frame: a box of `size`
    /// spanning from the joint to the end of the link.
    pub fn geometry(&self) -> Mat4 {
        Mat4::from_translation(Vec3::Y * (self.length * 0.5)) * Mat4::from_scale(self.size)
    }

    /// The reflected twin of a mirrored segment.
    pub fn mirror(&self) -> Segment {
        Segment {
            offset: Vec3::new(-self.offset.x, self.offset.y, self.offset.z),
            mirrored: false,
            ..*self
        }
    }
}

/// Transforms of one link for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentPose {
    pub joint: Joint,
    /// Frame at the joint origin, after the rotation.
    pub joint_frame: Mat4,
    /// Joint frame of the reflected twin, for mirrored segments.
    pub twin_frame: Option<Mat4>,
    /// Frame at the end of the link; inherited by the next segment.
    pub end_frame: Mat4,
}

/// The arm as an ordered chain `base → shoulder → elbow → wrist → claw`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArmModel {
    segments: [Segment; 5],
}

impl Default for ArmModel {
    fn default() -> Self {
        Self {
            segments: [
                Segment {
                    joint: Joint::Base,
                    axis: Vec3::Y,
                    offset: Vec3::ZERO,
                    length: 0.5,
                    size: Vec3::new(1.2, 0.5, 1.2),
                    mirrored: false,
                },
                Segment {
                    joint: Joint::Shoulder,
                    axis: Vec3::Z,
                    offset: Vec3::ZERO,
                    length: 2.0,
                    size: Vec3::new(0.4, 2.0, 0.4),
                    mirrored: false,
                },
                Segment {
                    joint: Joint::Elbow,
                    axis: Vec3::Z,
                    offset: Vec3::ZERO,
                    length: 1.5,
                    size: Vec3::new(0.32, 1.5, 0.32),
                    mirrored: false,
                },
                Segment {
                    joint: Joint::Wrist,
                    axis: Vec3::Z,
                    offset: Vec3::ZERO,
                    length: 0.4,
                    size: Vec3::new(0.6, 0.4, 0.3),
                    mirrored: false,
                },
                // -Z so a positive angle tips the +X finger outwards
                Segment {
                    joint: Joint::Claw,
                    axis: Vec3::NEG_Z,
                    offset: Vec3::new(0.22, 0.0, 0.0),
                    length: 0.6,
                    size: Vec3::new(0.1, 0.6, 0.2),
                    mirrored: true,
                },
            ],
        }
    }
}

impl ArmModel {
    pub fn segment(&self, joint: Joint) -> &Segment {
        &self.segments[joint.index()]
    }

    /// Walks the chain on `stack`, starting from its current top, and returns
    /// the transforms of every link.  The stack is left holding the end frame
    /// of the last link, the way a fixed-function chain leaves its transform
    /// in place for the next child.
    pub fn poses(&self, angles: &ArmAngles, stack: &mut MatrixStack) -> [SegmentPose; 5] {
        self.segments.map(|segment| {
            let degrees = angles.get(segment.joint);
            let twin_frame = segment.mirrored.then(|| {
                stack.scoped(|s| {
                    segment.mirror().apply_joint(s, -degrees);
                    s.top()
                })
            });
            segment.apply_joint(stack, degrees);
            let joint_frame = stack.top();
            stack.translate(Vec3::Y * segment.length);
            SegmentPose {
                joint: segment.joint,
                joint_frame,
                twin_frame,
                end_frame: stack.top(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    fn is_pure_translation(m: &Mat4) -> bool {
        let (scale, rotation, _) = m.to_scale_rotation_translation();
        scale.abs_diff_eq(Vec3::ONE, 1e-5) && rotation.abs_diff_eq(Quat::IDENTITY, 1e-5)
    }

    fn poses_from(angles: &ArmAngles, root: Mat4) -> [SegmentPose; 5] {
        ArmModel::default().poses(angles, &mut MatrixStack::with_root(root))
    }

    #[test]
    fn neutral_pose_is_pure_translation() {
        let model = ArmModel::default();
        let poses = poses_from(&ArmAngles::new(), Mat4::IDENTITY);
        let mut height = 0.0;
        for pose in &poses {
            let segment = model.segment(pose.joint);
            assert!(is_pure_translation(&pose.joint_frame), "{}", pose.joint);
            assert!(is_pure_translation(&pose.end_frame), "{}", pose.joint);
            height += segment.offset.y + segment.length;
            assert!((pose.end_frame.w_axis.y - height).abs() < 1e-5);
        }
    }

    #[test]
    fn poses_follow_chain_order() {
        let poses = poses_from(&ArmAngles::new(), Mat4::IDENTITY);
        let order: Vec<Joint> = poses.iter().map(|p| p.joint).collect();
        assert_eq!(order, Joint::ALL.to_vec());
    }

    #[test]
    fn shoulder_rotation_carries_children() {
        let model = ArmModel::default();
        let mut angles = ArmAngles::new();
        angles.rotate_shoulder(90.0);
        let poses = poses_from(&angles, Mat4::IDENTITY);

        let base_top = model.segment(Joint::Base).length;
        let shoulder = model.segment(Joint::Shoulder).length;
        let elbow = model.segment(Joint::Elbow).length;

        // +90° about Z swings +Y onto -X
        let elbow_joint = poses[Joint::Elbow.index()].joint_frame.w_axis.truncate();
        assert!(elbow_joint.abs_diff_eq(Vec3::new(-shoulder, base_top, 0.0), 1e-5));
        let elbow_end = poses[Joint::Elbow.index()].end_frame.w_axis.truncate();
        assert!(elbow_end.abs_diff_eq(Vec3::new(-(shoulder + elbow), base_top, 0.0), 1e-5));
    }

    #[test]
    fn root_transform_is_inherited() {
        let poses = poses_from(&ArmAngles::new(), Mat4::from_translation(Vec3::new(-3.0, 0.5, 0.0)));
        let base = poses[0].joint_frame.w_axis.truncate();
        assert!(base.abs_diff_eq(Vec3::new(-3.0, 0.5, 0.0), 1e-6));
    }

    #[test]
    fn joint_frame_is_parent_end_times_local_joint() {
        let model = ArmModel::default();
        let mut angles = ArmAngles::new();
        angles.rotate_elbow(30.0);
        let poses = poses_from(&angles, Mat4::IDENTITY);
        let elbow = model.segment(Joint::Elbow);
        let expected = poses[Joint::Shoulder.index()].end_frame
            * Mat4::from_translation(elbow.offset)
            * Mat4::from_axis_angle(elbow.axis, 30f32.to_radians());
        assert!(poses[Joint::Elbow.index()].joint_frame.abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn poses_leave_chain_end_on_stack() {
        let mut stack = MatrixStack::new();
        let poses = ArmModel::default().poses(&ArmAngles::new(), &mut stack);
        assert_eq!(stack.depth(), 1);
        assert!(stack.top().abs_diff_eq(poses[4].end_frame, 1e-6));
    }

    #[test]
    fn only_the_claw_has_a_twin() {
        let poses = poses_from(&ArmAngles::new(), Mat4::IDENTITY);
        for pose in &poses {
            assert_eq!(pose.twin_frame.is_some(), pose.joint == Joint::Claw, "{}", pose.joint);
        }
    }

    #[test]
    fn opening_the_claw_tips_fingers_outwards() {
        let mut angles = ArmAngles::new();
        angles.open_claw(30.0);
        let claw = poses_from(&angles, Mat4::IDENTITY)[Joint::Claw.index()];
        let finger_up = claw.joint_frame.y_axis.truncate();
        let twin_up = claw.twin_frame.map(|m| m.y_axis.truncate()).unwrap_or_default();
        assert!(finger_up.x > 0.0, "finger leans {finger_up}");
        assert!(twin_up.x < 0.0, "twin leans {twin_up}");
        assert!((finger_up.x + twin_up.x).abs() < 1e-5);
    }

    #[test]
    fn mirror_reflects_offset() {
        let claw = *ArmModel::default().segment(Joint::Claw);
        let twin = claw.mirror();
        assert_eq!(twin.offset.x, -claw.offset.x);
        assert!(!twin.mirrored);
    }
}
