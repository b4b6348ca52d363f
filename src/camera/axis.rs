use std::f32::consts::{PI, TAU};

use glam::Vec2;

use crate::options::{AxisLimits, AxisOptions};

/// Frame-rate independent smoothing factor, clamped so a long frame lands on
/// the goal instead of overshooting it.
#[inline]
pub(crate) fn smoothing_factor(delta_time: f32, smooth_speed: f32) -> f32 {
    (delta_time * smooth_speed).clamp(0.0, 1.0)
}

/// One smoothed orbit parameter: an angle or a distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisState {
    /// Current smoothed value; the pose is derived from this.
    pub value: f32,
    /// Input-driven value `value` converges toward.
    pub goal: f32,
    /// Baseline the axis starts at and resets to.
    pub default_value: f32,
    /// Clamp range for `goal`, if bounded.
    pub limits: Option<AxisLimits>,
    /// Smoothing rate (per second).
    pub smooth_speed: f32,
    /// Scale from raw input delta to axis units.
    pub input_speed: f32,
}

impl AxisState {
    /// Initialise at rest on the configured default.
    #[must_use]
    pub fn from_options(options: &AxisOptions) -> Self {
        Self {
            value: options.default_value,
            goal: options.default_value,
            default_value: options.default_value,
            limits: options.limits,
            smooth_speed: options.smooth_speed,
            input_speed: options.input_speed,
        }
    }

    /// Take new tuning while keeping the current value and goal.
    pub fn apply_options(&mut self, options: &AxisOptions) {
        self.default_value = options.default_value;
        self.limits = options.limits;
        self.smooth_speed = options.smooth_speed;
        self.input_speed = options.input_speed;
        self.clamp_goal();
    }

    /// Move the goal by `amount` input units, then clamp.
    pub fn push(&mut self, amount: f32) {
        self.goal += amount * self.input_speed;
        self.clamp_goal();
    }

    fn clamp_goal(&mut self) {
        if let Some(limits) = self.limits {
            self.goal = limits.clamp(self.goal);
        }
    }

    /// Step `value` toward `goal`.
    pub fn smooth(&mut self, delta_time: f32) {
        let t = smoothing_factor(delta_time, self.smooth_speed);
        self.value += (self.goal - self.value) * t;
    }

    /// Send the goal back to the default; the value follows smoothly.
    pub fn reset(&mut self) {
        self.goal = self.default_value;
    }

    /// Jump the value onto the goal.
    pub fn snap(&mut self) {
        self.value = self.goal;
    }

    /// Keep an unbounded angle near zero. Goal and value move by the same
    /// whole number of turns, so the smoothed motion is unaffected.
    pub fn wrap_angle(&mut self) {
        if self.limits.is_some() || self.goal.abs() <= PI {
            return;
        }
        let turns = (self.goal / TAU).round();
        self.goal -= turns * TAU;
        self.value -= turns * TAU;
    }
}

/// The three orbit parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitAxes {
    /// Azimuth around the target's up axis (radians).
    pub horizontal: AxisState,
    /// Elevation above the target's horizontal plane (radians).
    pub vertical: AxisState,
    /// Distance from the focus point (world units).
    pub zoom: AxisState,
}

impl OrbitAxes {
    /// Build all three axes from their options.
    #[must_use]
    pub fn new(
        horizontal: &AxisOptions,
        vertical: &AxisOptions,
        zoom: &AxisOptions,
    ) -> Self {
        Self {
            horizontal: AxisState::from_options(horizontal),
            vertical: AxisState::from_options(vertical),
            zoom: AxisState::from_options(zoom),
        }
    }

    /// Apply one frame of input and smoothing.
    ///
    /// Dragging left (positive `drag.x`) orbits toward negative azimuth,
    /// positive `drag.y` raises the camera, positive `scroll` zooms in.
    pub fn update(&mut self, drag: Vec2, scroll: f32, delta_time: f32) {
        self.horizontal.push(-drag.x);
        self.horizontal.smooth(delta_time);
        self.horizontal.wrap_angle();

        self.vertical.push(drag.y);
        self.vertical.smooth(delta_time);

        self.zoom.push(-scroll);
        self.zoom.smooth(delta_time);
    }

    /// Reset every goal to its default.
    pub fn reset(&mut self) {
        self.horizontal.reset();
        self.vertical.reset();
        self.zoom.reset();
    }

    /// Jump every value onto its goal.
    pub fn snap(&mut self) {
        self.horizontal.snap();
        self.vertical.snap();
        self.zoom.snap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axes() -> OrbitAxes {
        OrbitAxes::new(
            &AxisOptions::horizontal(),
            &AxisOptions::vertical(),
            &AxisOptions::zoom(),
        )
    }

    #[test]
    fn starts_at_rest_on_defaults() {
        let axes = axes();
        assert_eq!(axes.vertical.value, 0.3);
        assert_eq!(axes.vertical.goal, 0.3);
        assert_eq!(axes.zoom.value, 50.0);
    }

    #[test]
    fn scroll_zooms_in_and_clamps_at_min() {
        let mut zoom = AxisState::from_options(&AxisOptions {
            default_value: 30.0,
            ..AxisOptions::zoom()
        });
        zoom.push(-5.0);
        // 30 - 5 * 10 would be -20, clamped to the lower limit.
        assert_eq!(zoom.goal, 0.0);

        let mut zoom = AxisState::from_options(&AxisOptions::zoom());
        zoom.push(-1.0);
        assert_eq!(zoom.goal, 40.0);
    }

    #[test]
    fn bounded_goal_stays_in_limits() {
        let mut axes = axes();
        let drags = [500.0, -900.0, 30.0, 4000.0, -12.0, -7000.0];
        for (i, dy) in drags.iter().enumerate() {
            axes.update(Vec2::new(0.0, *dy), i as f32 * 3.0 - 5.0, 0.016);
            let v = axes.vertical.limits.unwrap();
            let z = axes.zoom.limits.unwrap();
            assert!(v.contains(axes.vertical.goal));
            assert!(z.contains(axes.zoom.goal));
        }
    }

    #[test]
    fn converges_monotonically_without_overshoot() {
        let mut axis = AxisState::from_options(&AxisOptions::zoom());
        axis.goal = 80.0;
        let mut previous = axis.value;
        for _ in 0..200 {
            axis.smooth(0.016);
            assert!(axis.value >= previous);
            assert!(axis.value <= axis.goal);
            previous = axis.value;
        }
        assert!((axis.value - 80.0).abs() < 1e-3);
    }

    #[test]
    fn long_frame_lands_on_goal() {
        let mut axis = AxisState::from_options(&AxisOptions::zoom());
        axis.goal = 20.0;
        // dt * speed = 5, which would overshoot without clamping.
        axis.smooth(0.5);
        assert_eq!(axis.value, 20.0);
    }

    #[test]
    fn horizontal_is_unbounded_and_wraps() {
        let mut axes = axes();
        for _ in 0..100 {
            axes.update(Vec2::new(-100.0, 0.0), 0.0, 0.016);
        }
        // 100 frames of one radian each would be far past a full turn.
        assert!(axes.horizontal.goal.abs() <= PI);
        assert!((axes.horizontal.goal - axes.horizontal.value).abs() < TAU);
    }

    #[test]
    fn wrapping_preserves_goal_value_offset() {
        let mut axis = AxisState::from_options(&AxisOptions::horizontal());
        axis.goal = 7.0;
        axis.value = 6.5;
        axis.wrap_angle();
        assert!((axis.goal - (7.0 - TAU)).abs() < 1e-5);
        assert!(((axis.goal - axis.value) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn reset_and_snap() {
        let mut axes = axes();
        axes.update(Vec2::new(0.0, 50.0), 2.0, 0.016);
        axes.reset();
        assert_eq!(axes.vertical.goal, 0.3);
        assert_eq!(axes.zoom.goal, 50.0);

        axes.zoom.goal = 70.0;
        axes.snap();
        assert_eq!(axes.zoom.value, 70.0);
    }

    #[test]
    fn apply_options_clamps_existing_goal() {
        let mut zoom = AxisState::from_options(&AxisOptions::zoom());
        zoom.goal = 90.0;
        zoom.apply_options(&AxisOptions {
            limits: Some(AxisLimits::new(0.0, 60.0)),
            ..AxisOptions::zoom()
        });
        assert_eq!(zoom.goal, 60.0);
        assert_eq!(zoom.value, 50.0);
    }
}
