//! Picking and highlight options with TOML preset support.
//!
//! All tweakable settings (ray casting, highlight appearance, camera,
//! pointer gestures, keybindings) are consolidated here. Options serialize
//! to/from TOML so a host can keep presets on disk.

mod camera;
mod highlight;
mod input;
mod keybindings;
mod picking;

use std::path::Path;

pub use camera::CameraOptions;
pub use highlight::HighlightOptions;
pub use input::InputOptions;
pub use keybindings::KeybindingOptions;
pub use picking::PickingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PickError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[highlight]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Ray casting parameters.
    pub picking: PickingOptions,
    /// Highlight overlay appearance.
    pub highlight: HighlightOptions,
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Pointer gesture parameters.
    pub input: InputOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// JSON Schema as pretty-printed text, for UI generators.
    ///
    /// # Errors
    ///
    /// Returns [`PickError::OptionsParse`] if the schema cannot be
    /// serialized.
    pub fn json_schema_string() -> Result<String, PickError> {
        serde_json::to_string_pretty(&Self::json_schema())
            .map_err(|e| PickError::OptionsParse(e.to_string()))
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PickError::OptionsParse`] if the text is not valid TOML for
    /// these options.
    pub fn from_toml_str(content: &str) -> Result<Self, PickError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| PickError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PickError::Io`] if the file cannot be read and
    /// [`PickError::OptionsParse`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self, PickError> {
        let content = std::fs::read_to_string(path).map_err(PickError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`PickError::OptionsParse`] if serialization fails and
    /// [`PickError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), PickError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PickError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PickError::Io)?;
        }
        std::fs::write(path, content).map_err(PickError::Io)
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
