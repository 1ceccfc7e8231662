//! Centralized interaction options with TOML preset support.
//!
//! Camera behaviour, input bindings and UI formatting are consolidated here.
//! Options serialize to/from TOML so a garage can ship presets next to its
//! layout files.

mod camera;
mod display;
mod input;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use input::{AxisDirection, InputOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GarageError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Orbit and focus camera parameters.
    pub camera: CameraOptions,
    /// Key bindings and wheel scaling.
    pub input: InputOptions,
    /// UI formatting.
    pub display: DisplayOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`GarageError::OptionsParse`] for malformed TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, GarageError> {
        toml::from_str(content)
            .map_err(|e| GarageError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GarageError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, GarageError> {
        let content = std::fs::read_to_string(path).map_err(GarageError::Io)?;
        let options = Self::from_toml_str(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`GarageError`] if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), GarageError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GarageError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GarageError::Io)?;
        }
        std::fs::write(path, content).map_err(GarageError::Io)?;
        log::info!("saved options to {}", path.display());
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
