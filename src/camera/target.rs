use glam::{Quat, Vec3};

use crate::error::RigError;

/// World transform of the object the rig orbits.
///
/// The host owns the real scene node; it hands the rig a copy each time the
/// node moves via
/// [`OrbitCameraController::set_target`](super::OrbitCameraController::set_target).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetTransform {
    /// World-space position.
    pub translation: Vec3,
    /// World-space orientation. Its local +Y is the orbit's up axis.
    pub rotation: Quat,
}

impl Default for TargetTransform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl TargetTransform {
    /// Create a transform from its parts.
    #[must_use]
    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Unrotated target at `translation`.
    #[must_use]
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::default()
        }
    }

    /// Map a point from target-local to world space.
    #[must_use]
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.translation + self.rotation * local
    }

    /// The target's local up axis in world space.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Reject transforms that would poison every derived pose.
    pub(crate) fn validate(&self) -> Result<(), RigError> {
        if !self.translation.is_finite() {
            return Err(RigError::InvalidTarget(format!(
                "translation {} is not finite",
                self.translation
            )));
        }
        if !self.rotation.is_finite() || !self.rotation.is_normalized() {
            return Err(RigError::InvalidTarget(format!(
                "rotation {} is not a unit quaternion",
                self.rotation
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn transform_point_rotates_then_translates() {
        let target = TargetTransform::new(
            Vec3::new(1.0, 2.0, 3.0),
            Quat::from_rotation_y(FRAC_PI_2),
        );
        let world = target.transform_point(Vec3::Z);
        assert!((world - Vec3::new(2.0, 2.0, 3.0)).length() < 1e-5);
    }

    #[test]
    fn up_follows_rotation() {
        let target = TargetTransform::new(
            Vec3::ZERO,
            Quat::from_rotation_z(FRAC_PI_2),
        );
        assert!((target.up() - Vec3::NEG_X).length() < 1e-5);
    }

    #[test]
    fn non_finite_target_is_rejected() {
        let target = TargetTransform::from_translation(Vec3::new(
            f32::NAN,
            0.0,
            0.0,
        ));
        assert!(matches!(
            target.validate(),
            Err(RigError::InvalidTarget(_))
        ));

        let skewed =
            TargetTransform::new(Vec3::ZERO, Quat::from_xyzw(0.0, 0.0, 0.0, 2.0));
        assert!(skewed.validate().is_err());
    }
}
