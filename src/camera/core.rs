use glam::{Mat4, Vec2, Vec3};

use super::pose::CameraPose;
use crate::options::CameraOptions;
use crate::picking::Ray;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Camera at `pose` with the projection from `options`.
    #[must_use]
    pub fn new(pose: &CameraPose, options: &CameraOptions) -> Self {
        Self {
            eye: pose.eye,
            target: pose.focus,
            up: pose.up,
            aspect: 1.0,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Move the camera to `pose`, keeping the projection.
    pub fn set_pose(&mut self, pose: &CameraPose) {
        self.eye = pose.eye;
        self.target = pose.focus;
        self.up = pose.up;
    }

    /// Take new projection parameters.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.fovy = options.fovy;
        self.znear = options.znear;
        self.zfar = options.zfar;
    }

    /// Update the aspect ratio from a viewport size. Degenerate sizes
    /// (minimised windows) keep the previous ratio.
    pub fn resize(&mut self, viewport: Vec2) {
        if viewport.x > 0.0 && viewport.y > 0.0 {
            self.aspect = viewport.x / viewport.y;
        }
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        self.build_projection() * view
    }

    /// Get just the projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh uses the [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Ray from the near plane through a screen point (physical pixels,
    /// top-left origin).
    #[must_use]
    pub fn screen_point_to_ray(&self, point: Vec2, viewport: Vec2) -> Ray {
        let ndc_x = 2.0 * point.x / viewport.x.max(1.0) - 1.0;
        let ndc_y = 1.0 - 2.0 * point.y / viewport.y.max(1.0);

        let inverse = self.build_matrix().inverse();
        let near = inverse.project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
        let far = inverse.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));
        Ray::new(near, far - near)
    }
}
