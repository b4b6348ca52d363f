use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::RigError;

/// Inclusive clamp range applied to an axis goal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(inline)]
pub struct AxisLimits {
    /// Lower bound.
    pub min: f32,
    /// Upper bound.
    pub max: f32,
}

impl AxisLimits {
    /// Create a new range.
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamp `value` into the range.
    #[must_use]
    pub fn clamp(&self, value: f32) -> f32 {
        value.max(self.min).min(self.max)
    }

    /// Whether `value` lies inside the range.
    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(inline)]
#[serde(default)]
/// Tuning for one orbit axis (angle or distance).
///
/// The `Default` impl is a neutral unbounded axis. Inside [`Options`]
/// each axis table is layered over its own preset instead, so a table that
/// sets only `smooth_speed` keeps the preset's default and limits.
///
/// [`Options`]: super::Options
pub struct AxisOptions {
    /// Baseline the axis starts at and returns to on reset.
    #[schemars(title = "Default")]
    pub default_value: f32,
    /// Clamp range for the goal. `None` leaves the axis unbounded.
    #[schemars(skip)]
    pub limits: Option<AxisLimits>,
    /// Exponential smoothing rate (per second).
    #[schemars(title = "Smoothing", range(min = 0.5, max = 30.0), extend("step" = 0.5))]
    pub smooth_speed: f32,
    /// Scale from raw input delta (pixels or scroll lines) to axis units.
    #[schemars(title = "Sensitivity")]
    pub input_speed: f32,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            default_value: 0.0,
            limits: None,
            smooth_speed: 10.0,
            input_speed: 0.01,
        }
    }
}

impl AxisOptions {
    /// Azimuth around the target's up axis, in radians. Unbounded.
    #[must_use]
    pub fn horizontal() -> Self {
        Self::default()
    }

    /// Elevation above the target's horizontal plane, in radians.
    #[must_use]
    pub fn vertical() -> Self {
        Self {
            default_value: 0.3,
            limits: Some(AxisLimits::new(0.1, 1.7)),
            ..Self::default()
        }
    }

    /// Distance from the focus point, in world units.
    #[must_use]
    pub fn zoom() -> Self {
        Self {
            default_value: 50.0,
            limits: Some(AxisLimits::new(0.0, 100.0)),
            smooth_speed: 10.0,
            input_speed: 10.0,
        }
    }

    /// Reject non-finite values, negative smoothing and inverted limits.
    pub fn validate(&self, axis: &str) -> Result<(), RigError> {
        let finite = self.default_value.is_finite()
            && self.smooth_speed.is_finite()
            && self.input_speed.is_finite();
        if !finite {
            return Err(RigError::InvalidOptions(format!(
                "{axis}: values must be finite"
            )));
        }
        if self.smooth_speed < 0.0 {
            return Err(RigError::InvalidOptions(format!(
                "{axis}: smooth_speed {} is negative",
                self.smooth_speed
            )));
        }
        if let Some(limits) = self.limits {
            if !(limits.min.is_finite() && limits.max.is_finite())
                || limits.min > limits.max
            {
                return Err(RigError::InvalidOptions(format!(
                    "{axis}: limits [{}, {}] are not a valid range",
                    limits.min, limits.max
                )));
            }
            if !limits.contains(self.default_value) {
                return Err(RigError::InvalidOptions(format!(
                    "{axis}: default {} lies outside [{}, {}]",
                    self.default_value, limits.min, limits.max
                )));
            }
        }
        Ok(())
    }
}

/// Fields present in an axis table; absent ones come from a preset.
#[derive(Deserialize)]
struct AxisOverrides {
    default_value: Option<f32>,
    limits: Option<AxisLimits>,
    smooth_speed: Option<f32>,
    input_speed: Option<f32>,
}

impl AxisOverrides {
    fn over(self, preset: AxisOptions) -> AxisOptions {
        AxisOptions {
            default_value: self.default_value.unwrap_or(preset.default_value),
            limits: self.limits.or(preset.limits),
            smooth_speed: self.smooth_speed.unwrap_or(preset.smooth_speed),
            input_speed: self.input_speed.unwrap_or(preset.input_speed),
        }
    }
}

pub(super) fn horizontal_table<'de, D>(d: D) -> Result<AxisOptions, D::Error>
where
    D: Deserializer<'de>,
{
    AxisOverrides::deserialize(d).map(|o| o.over(AxisOptions::horizontal()))
}

pub(super) fn vertical_table<'de, D>(d: D) -> Result<AxisOptions, D::Error>
where
    D: Deserializer<'de>,
{
    AxisOverrides::deserialize(d).map(|o| o.over(AxisOptions::vertical()))
}

pub(super) fn zoom_table<'de, D>(d: D) -> Result<AxisOptions, D::Error>
where
    D: Deserializer<'de>,
{
    AxisOverrides::deserialize(d).map(|o| o.over(AxisOptions::zoom()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        assert!(AxisOptions::horizontal().validate("horizontal").is_ok());
        assert!(AxisOptions::vertical().validate("vertical").is_ok());
        assert!(AxisOptions::zoom().validate("zoom").is_ok());
    }

    #[test]
    fn inverted_limits_are_rejected() {
        let opts = AxisOptions {
            limits: Some(AxisLimits::new(5.0, 1.0)),
            default_value: 2.0,
            ..AxisOptions::default()
        };
        let err = opts.validate("zoom").unwrap_err();
        assert!(err.to_string().contains("zoom"));
    }

    #[test]
    fn default_outside_limits_is_rejected() {
        let opts = AxisOptions {
            default_value: 3.0,
            ..AxisOptions::vertical()
        };
        assert!(opts.validate("vertical").is_err());
    }

    #[test]
    fn clamp_respects_bounds() {
        let limits = AxisLimits::new(0.0, 100.0);
        assert_eq!(limits.clamp(-50.0), 0.0);
        assert_eq!(limits.clamp(150.0), 100.0);
        assert_eq!(limits.clamp(42.0), 42.0);
    }
}
