//! Centralized tuning options with TOML preset support.
//!
//! Every constant that shapes the motion (camera projection, sway gains and
//! damping times, section trigger) lives here. Options serialize to/from
//! TOML presets stored in `assets/presets/`.

mod camera;
mod rig;
mod section;

use std::path::Path;

pub use camera::CameraOptions;
pub use rig::RigOptions;
use schemars::JsonSchema;
pub use section::SectionOptions;
use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[rig]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Camera sway tuning.
    pub rig: RigOptions,
    /// Skills-section trigger.
    pub section: SectionOptions,
}

fn invalid(field: &'static str, reason: &str) -> FolioError {
    FolioError::InvalidOption {
        field,
        reason: reason.to_owned(),
    }
}

fn require_positive(field: &'static str, value: f32) -> Result<(), FolioError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be a positive finite number"))
    }
}

fn require_finite(field: &'static str, values: &[f32]) -> Result<(), FolioError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(invalid(field, "must be finite"))
    }
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Check that every value keeps the motion finite and stable.
    pub fn validate(&self) -> Result<(), FolioError> {
        let camera = &self.camera;
        require_positive("camera.fovy", camera.fovy)?;
        if camera.fovy >= 180.0 {
            return Err(invalid("camera.fovy", "must be below 180 degrees"));
        }
        require_positive("camera.znear", camera.znear)?;
        require_positive("camera.zfar", camera.zfar)?;
        if camera.zfar <= camera.znear {
            return Err(invalid("camera.zfar", "must exceed camera.znear"));
        }

        let rig = &self.rig;
        require_finite("rig.base_position", &rig.base_position)?;
        require_finite("rig.look_target", &rig.look_target)?;
        require_finite("rig.sway_strength", &rig.sway_strength)?;
        require_finite("rig.look_sway", &rig.look_sway)?;
        require_positive("rig.held_damping_time", rig.held_damping_time)?;
        require_positive(
            "rig.position_damping_time",
            rig.position_damping_time,
        )?;
        require_positive("rig.look_damping_time", rig.look_damping_time)?;
        if !(rig.smoothing_gain > 0.0 && rig.smoothing_gain <= 1.0) {
            return Err(invalid("rig.smoothing_gain", "must be in (0, 1]"));
        }
        if !(0.0..1.0).contains(&rig.velocity_damping) {
            return Err(invalid("rig.velocity_damping", "must be in [0, 1)"));
        }

        let section = &self.section;
        if !(0.0..=1.0).contains(&section.visibility_threshold) {
            return Err(invalid(
                "section.visibility_threshold",
                "must be in [0, 1]",
            ));
        }
        require_finite("section.root_margin", &[section.root_margin])?;
        Ok(())
    }

    /// Load options from a TOML file. Missing fields use defaults; the result
    /// is validated.
    pub fn load(path: &Path) -> Result<Self, FolioError> {
        let content = std::fs::read_to_string(path).map_err(FolioError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse and validate options from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, FolioError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| FolioError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FolioError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FolioError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FolioError::Io)?;
        }
        std::fs::write(path, content).map_err(FolioError::Io)
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
