//! Centralized rig options with TOML preset support.
//!
//! All tweakable settings (axis tuning, projection, picking, focus
//! smoothing, action bindings) are consolidated here. Options serialize
//! to/from TOML so hosts can ship and swap camera presets.

mod axis;
mod bindings;
mod camera;
mod picking;

use std::path::Path;

pub use axis::{AxisLimits, AxisOptions};
pub use bindings::ActionBindings;
pub use camera::CameraOptions;
pub use picking::{FocusOptions, PickingOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RigError;

/// Top-level options container. Missing sections fall back to defaults and
/// axis tables layer over their presets, so partial TOML files (e.g. only
/// overriding `zoom.smooth_speed`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Tag post-render callbacks as auto-registered (code 1) rather than
    /// manual (code 2).
    #[schemars(skip)]
    pub auto_register_post_render: bool,
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Azimuth axis.
    #[serde(deserialize_with = "axis::horizontal_table")]
    #[schemars(with = "AxisOptions")]
    pub horizontal: AxisOptions,
    /// Elevation axis.
    #[serde(deserialize_with = "axis::vertical_table")]
    #[schemars(with = "AxisOptions")]
    pub vertical: AxisOptions,
    /// Distance axis.
    #[serde(deserialize_with = "axis::zoom_table")]
    #[schemars(with = "AxisOptions")]
    pub zoom: AxisOptions,
    /// Look-at point smoothing.
    pub focus: FocusOptions,
    /// Pointer ray and drag-start parameters.
    pub picking: PickingOptions,
    /// Action bindings.
    #[schemars(skip)]
    pub bindings: ActionBindings,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            auto_register_post_render: false,
            camera: CameraOptions::default(),
            horizontal: AxisOptions::horizontal(),
            vertical: AxisOptions::vertical(),
            zoom: AxisOptions::zoom(),
            focus: FocusOptions::default(),
            picking: PickingOptions::default(),
            bindings: ActionBindings::default(),
        }
    }
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Check every section for values the rig cannot run with.
    pub fn validate(&self) -> Result<(), RigError> {
        self.camera.validate()?;
        self.horizontal.validate("horizontal")?;
        self.vertical.validate("vertical")?;
        self.zoom.validate("zoom")?;
        self.focus.validate()?;
        self.picking.validate()
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, RigError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| RigError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, RigError> {
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_toml(&content)?;
        log::info!("Loaded rig options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), RigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RigError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        log::info!("Saved rig options to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
