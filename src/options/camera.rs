use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RigError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 60.0,
            znear: 0.3,
            zfar: 1000.0,
        }
    }
}

impl CameraOptions {
    pub(crate) fn validate(&self) -> Result<(), RigError> {
        if self.fovy.is_nan() || self.fovy <= 0.0 || self.fovy >= 180.0 {
            return Err(RigError::InvalidOptions(format!(
                "camera: fovy {} must lie in (0, 180)",
                self.fovy
            )));
        }
        if !self.zfar.is_finite()
            || self.znear.is_nan()
            || self.znear <= 0.0
            || self.znear >= self.zfar
        {
            return Err(RigError::InvalidOptions(format!(
                "camera: clip range [{}, {}] is not valid",
                self.znear, self.zfar
            )));
        }
        Ok(())
    }
}
