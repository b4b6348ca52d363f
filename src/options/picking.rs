use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RigError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Picking", inline)]
#[serde(default)]
/// Pointer ray and drag-start parameters.
pub struct PickingOptions {
    /// Longest ray the pick query casts, in world units.
    #[schemars(skip)]
    pub max_distance: f32,
    /// Fraction of the screen height, measured from the top edge, in which
    /// a rotate press does not start a drag (toolbars, title strips).
    #[schemars(title = "Drag Exclusion Band", range(min = 0.0, max = 0.5), extend("step" = 0.01))]
    pub drag_exclusion_band: f32,
}

impl Default for PickingOptions {
    fn default() -> Self {
        Self {
            max_distance: 10_000.0,
            drag_exclusion_band: 0.1,
        }
    }
}

impl PickingOptions {
    pub(crate) fn validate(&self) -> Result<(), RigError> {
        if self.max_distance.is_nan() || self.max_distance <= 0.0 {
            return Err(RigError::InvalidOptions(format!(
                "picking: max_distance {} must be positive",
                self.max_distance
            )));
        }
        if !(0.0..1.0).contains(&self.drag_exclusion_band) {
            return Err(RigError::InvalidOptions(format!(
                "picking: drag_exclusion_band {} must lie in [0, 1)",
                self.drag_exclusion_band
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Focus", inline)]
#[serde(default)]
/// How the look-at point follows picked objects.
pub struct FocusOptions {
    /// Smoothing rate of the look-at point toward its goal (per second).
    #[schemars(title = "Focus Smoothing", range(min = 0.5, max = 30.0), extend("step" = 0.5))]
    pub smooth_speed: f32,
}

impl Default for FocusOptions {
    fn default() -> Self {
        Self { smooth_speed: 2.0 }
    }
}

impl FocusOptions {
    pub(crate) fn validate(&self) -> Result<(), RigError> {
        if !(self.smooth_speed.is_finite() && self.smooth_speed >= 0.0) {
            return Err(RigError::InvalidOptions(format!(
                "focus: smooth_speed {} must be finite and non-negative",
                self.smooth_speed
            )));
        }
        Ok(())
    }
}
