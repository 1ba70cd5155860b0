use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::arm::{ArmAngles, Joint};
use crate::camera::OrbitCamera;
use crate::kinematics::ArmModel;
use crate::matrix_stack::MatrixStack;
use crate::projection::{Projection, Viewport};
use crate::scene::draw_list::{DrawItem, DrawList, MeshKind, TextureSlot};

/// Static placement of the floor and the arm in the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLayout {
    /// Edge length of the square floor, world units.
    pub floor_size: f32,
    /// How many times the floor texture repeats along each edge.
    pub floor_tiles: f32,
    /// Where the arm's base sits relative to the floor origin.
    pub arm_root: Vec3,
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self {
            floor_size: 20.0,
            floor_tiles: 10.0,
            arm_root: Vec3::new(-3.0, 0.5, 0.0),
        }
    }
}

/// Emits the floor quad at the current top of `stack`.
pub fn draw_floor(stack: &mut MatrixStack, layout: &SceneLayout, list: &mut DrawList) {
    stack.scoped(|s| {
        s.scale(Vec3::new(layout.floor_size, 1.0, layout.floor_size));
        list.push(DrawItem {
            mesh: MeshKind::Floor,
            texture: TextureSlot::Floor,
            model_view: s.top(),
            tint: Vec4::ONE,
            uv_scale: Vec2::splat(layout.floor_tiles),
        });
    });
}

/// Emits the arm's links in parent-to-child order, each mirrored twin just
/// before its finger.
///
/// The stack is left holding the end frame of the last link; callers that
/// need the previous top back wrap this in a push/pop.
pub fn draw_arm(
    stack: &mut MatrixStack,
    model: &ArmModel,
    angles: &ArmAngles,
    list: &mut DrawList,
) {
    for pose in model.poses(angles, stack) {
        let geometry = model.segment(pose.joint).geometry();
        let tint = joint_tint(pose.joint);
        if let Some(twin) = pose.twin_frame {
            list.push(arm_item(twin * geometry, tint));
        }
        list.push(arm_item(pose.joint_frame * geometry, tint));
    }
}

/// Builds the draw list for one frame:
/// camera → floor → translate to the arm root → arm.
pub fn compose_frame(
    camera: &OrbitCamera,
    angles: &ArmAngles,
    model: &ArmModel,
    layout: &SceneLayout,
    viewport: Viewport,
    projection: &Projection,
) -> DrawList {
    let mut list = DrawList::new(viewport, projection.matrix());
    let mut stack = MatrixStack::new();

    stack.scoped(|s| {
        camera.look_at(s);
        draw_floor(s, layout, &mut list);
        s.translate(layout.arm_root);
        draw_arm(s, model, angles, &mut list);
    });

    list
}

fn arm_item(model_view: Mat4, tint: Vec4) -> DrawItem {
    DrawItem {
        mesh: MeshKind::Cube,
        texture: TextureSlot::Arm,
        model_view,
        tint,
        uv_scale: Vec2::ONE,
    }
}

// alternating shades make neighbouring links readable under flat shading
fn joint_tint(joint: Joint) -> Vec4 {
    match joint {
        Joint::Base | Joint::Elbow | Joint::Claw => Vec4::new(0.85, 0.85, 0.9, 1.0),
        Joint::Shoulder | Joint::Wrist => Vec4::ONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::reshape;
    use glam::Quat;

    fn frame(angles: &ArmAngles) -> (OrbitCamera, DrawList) {
        let camera = OrbitCamera::default();
        let (viewport, projection) = reshape(800, 600);
        let list = compose_frame(
            &camera,
            angles,
            &ArmModel::default(),
            &SceneLayout::default(),
            viewport,
            &projection,
        );
        (camera, list)
    }

    #[test]
    fn floor_first_then_every_link() {
        let (_, list) = frame(&ArmAngles::new());
        // floor + five links + the mirrored claw finger
        assert_eq!(list.len(), 7);
        assert_eq!(list.items[0].mesh, MeshKind::Floor);
        assert_eq!(list.items[0].texture, TextureSlot::Floor);
        assert_eq!(list.items[0].uv_scale, Vec2::splat(10.0));
        assert_eq!(list.with_texture(TextureSlot::Arm).count(), 6);
        assert!(list.items[1..].iter().all(|i| i.mesh == MeshKind::Cube));
    }

    #[test]
    fn floor_is_scaled_under_the_view() {
        let (camera, list) = frame(&ArmAngles::new());
        let expected = camera.view_matrix() * Mat4::from_scale(Vec3::new(20.0, 1.0, 20.0));
        assert!(list.items[0].model_view.abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn neutral_arm_is_axis_aligned_in_world() {
        let (camera, list) = frame(&ArmAngles::new());
        let inv_view = camera.view_matrix().inverse();
        for item in &list.items[1..] {
            let world = inv_view * item.model_view;
            let (_, rotation, _) = world.to_scale_rotation_translation();
            assert!(rotation.abs_diff_eq(Quat::IDENTITY, 1e-4));
        }
        // the base link is centred half its height above the arm root
        let base = inv_view * list.items[1].model_view;
        let root = SceneLayout::default().arm_root;
        let expected = root + Vec3::Y * ArmModel::default().segment(Joint::Base).length * 0.5;
        assert!(base.w_axis.truncate().abs_diff_eq(expected, 1e-4));
    }

    fn fingertips(angles: &ArmAngles) -> (Vec3, Vec3) {
        let (camera, list) = frame(angles);
        let inv_view = camera.view_matrix().inverse();
        // top face centre of the unit cube
        let tip = |i: usize| (inv_view * list.items[i].model_view).transform_point3(Vec3::Y * 0.5);
        (tip(5), tip(6))
    }

    #[test]
    fn claw_fingers_open_symmetrically() {
        let mut angles = ArmAngles::new();
        angles.open_claw(30.0);
        let (twin, finger) = fingertips(&angles);
        let centre = SceneLayout::default().arm_root.x;
        assert!((finger.x - centre + (twin.x - centre)).abs() < 1e-4);
        assert!((finger.y - twin.y).abs() < 1e-4);
    }

    #[test]
    fn opening_claw_widens_finger_gap() {
        let mut angles = ArmAngles::new();
        let mut previous = 0.0;
        for opening in [0.0, 15.0, 30.0, 45.0] {
            angles.set(Joint::Claw, opening);
            let (twin, finger) = fingertips(&angles);
            let gap = finger.x - twin.x;
            assert!(gap > previous, "gap {gap} at {opening}° after {previous}");
            previous = gap;
        }
    }

    #[test]
    fn draw_arm_leaves_chain_end_on_stack() {
        let model = ArmModel::default();
        let angles = ArmAngles::new();
        let mut stack = MatrixStack::new();
        let mut list = DrawList::new(Viewport::full(1, 1), Mat4::IDENTITY);
        draw_arm(&mut stack, &model, &angles, &mut list);
        let poses = model.poses(&angles, &mut MatrixStack::new());
        assert!(stack.top().abs_diff_eq(poses[4].end_frame, 1e-5));
        assert_eq!(stack.depth(), 1);
    }
}
