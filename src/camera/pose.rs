use glam::{Mat3, Mat4, Quat, Vec3};

use super::axis::OrbitAxes;
use super::target::TargetTransform;

/// Where the camera sits and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera looks at.
    pub focus: Vec3,
    /// Up hint (the target's local up).
    pub up: Vec3,
}

impl CameraPose {
    /// Unit vector from the eye toward the focus point.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.focus - self.eye).normalize_or_zero()
    }

    /// Distance between the eye and the focus point.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.eye.distance(self.focus)
    }

    /// Right-handed view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.focus, self.up)
    }

    /// World orientation of a camera whose local -Z looks at the focus.
    ///
    /// Falls back to the identity when the eye sits on the focus point.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        let forward = self.forward();
        if forward == Vec3::ZERO {
            return Quat::IDENTITY;
        }
        let right = forward.cross(self.up).normalize_or_zero();
        if right == Vec3::ZERO {
            // Looking straight along the up hint; any roll is as good.
            return Quat::from_rotation_arc(Vec3::NEG_Z, forward);
        }
        let up = right.cross(forward);
        Quat::from_mat3(&Mat3::from_cols(right, up, -forward))
    }
}

/// Offset of the eye from the focus in the target's local frame.
#[must_use]
pub fn spherical_offset(horizontal: f32, vertical: f32, distance: f32) -> Vec3 {
    let (sin_h, cos_h) = horizontal.sin_cos();
    let (sin_v, cos_v) = vertical.sin_cos();
    Vec3::new(sin_h * cos_v, sin_v, cos_h * cos_v) * distance
}

/// Closest the eye may sit to the focus. Below this the view direction is
/// undefined and the view matrix degenerates.
pub const MIN_EYE_DISTANCE: f32 = 1e-3;

/// Place the camera on the orbit sphere around `focus`.
///
/// The offset is rotated into the target's frame, so the orbit follows the
/// target's orientation and its local up. A zoom closer than
/// [`MIN_EYE_DISTANCE`] is pushed out to it along the same direction.
#[must_use]
pub fn solve_pose(
    axes: &OrbitAxes,
    target: &TargetTransform,
    focus: Vec3,
) -> CameraPose {
    let mut distance = axes.zoom.value;
    if distance.abs() < MIN_EYE_DISTANCE {
        distance = MIN_EYE_DISTANCE;
    }
    let offset = spherical_offset(
        axes.horizontal.value,
        axes.vertical.value,
        distance,
    );
    CameraPose {
        eye: focus + target.rotation * offset,
        focus,
        up: target.up(),
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;
    use crate::options::AxisOptions;

    fn axes(h: f32, v: f32, zoom: f32) -> OrbitAxes {
        let mut axes = OrbitAxes::new(
            &AxisOptions::horizontal(),
            &AxisOptions::vertical(),
            &AxisOptions::zoom(),
        );
        axes.horizontal.value = h;
        axes.vertical.value = v;
        axes.zoom.value = zoom;
        axes
    }

    #[test]
    fn straight_behind_target() {
        let target = TargetTransform::default();
        let pose = solve_pose(&axes(0.0, 0.0, 10.0), &target, Vec3::ZERO);
        assert!((pose.eye - Vec3::new(0.0, 0.0, 10.0)).length() < 1e-5);
        assert!((pose.forward() - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn distance_equals_zoom() {
        let target = TargetTransform::new(
            Vec3::new(4.0, -2.0, 7.0),
            Quat::from_rotation_x(0.4),
        );
        for (h, v, zoom) in [(0.3, 0.2, 12.0), (-2.5, 1.4, 3.0), (9.0, 0.1, 77.0)]
        {
            let pose = solve_pose(&axes(h, v, zoom), &target, target.translation);
            assert!((pose.distance() - zoom).abs() < 1e-3);
        }
    }

    #[test]
    fn matches_target_local_to_world() {
        let target = TargetTransform::new(
            Vec3::new(1.0, 0.0, -3.0),
            Quat::from_rotation_y(0.7),
        );
        let a = axes(0.5, 0.6, 20.0);
        let pose = solve_pose(&a, &target, target.translation);
        let expected = target.transform_point(spherical_offset(0.5, 0.6, 20.0));
        assert!((pose.eye - expected).length() < 1e-4);
    }

    #[test]
    fn forward_points_at_focus() {
        let target = TargetTransform::default();
        let focus = Vec3::new(3.0, 1.0, -2.0);
        let pose = solve_pose(&axes(1.1, 0.9, 15.0), &target, focus);
        let to_focus = (focus - pose.eye).normalize();
        assert!(pose.forward().cross(to_focus).length() < 1e-5);
        assert!(pose.forward().dot(to_focus) > 0.999);
    }

    #[test]
    fn rotation_looks_down_negative_z() {
        let target = TargetTransform::default();
        let pose = solve_pose(&axes(0.8, 0.5, 10.0), &target, Vec3::ZERO);
        let look = pose.rotation() * Vec3::NEG_Z;
        assert!((look - pose.forward()).length() < 1e-4);
    }

    #[test]
    fn zero_zoom_keeps_eye_off_focus() {
        let target = TargetTransform::default();
        let pose = solve_pose(&axes(0.4, 0.3, 0.0), &target, Vec3::ZERO);
        assert!((pose.distance() - MIN_EYE_DISTANCE).abs() < 1e-6);
        assert!(pose.view_matrix().is_finite());
        assert!(pose.forward().is_normalized());
    }

    #[test]
    fn rotation_survives_pole() {
        let target = TargetTransform::default();
        let pose = solve_pose(&axes(0.0, FRAC_PI_2, 10.0), &target, Vec3::ZERO);
        let look = pose.rotation() * Vec3::NEG_Z;
        assert!((look - Vec3::NEG_Y).length() < 1e-3);
    }
}
