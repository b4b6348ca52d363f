//! Orbit camera: smoothed axes, pose solving, projection, and the
//! frame-driven controller that ties them to input and picking.

/// Smoothed orbit parameters.
pub mod axis;
/// Orbit camera controller driven by per-frame phases.
pub mod controller;
/// Perspective camera and screen-point rays.
pub mod core;
/// Spherical pose solving around the focus point.
pub mod pose;
/// World transform of the orbited target.
pub mod target;

pub use axis::{AxisState, OrbitAxes};
pub use controller::OrbitCameraController;
pub use self::core::Camera;
pub use pose::{
    solve_pose, spherical_offset, CameraPose, MIN_EYE_DISTANCE,
};
pub use target::TargetTransform;
