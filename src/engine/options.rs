//! Options methods for PickingEngine

use std::path::Path;

use super::PickingEngine;
use crate::highlight::{HighlightMaterial, OverlayRenderer};
use crate::options::Options;
use crate::picking::RayCaster;

impl<R: OverlayRenderer> PickingEngine<R> {
    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Name of the last preset loaded or saved.
    #[must_use]
    pub fn active_preset(&self) -> Option<&str> {
        self.active_preset.as_deref()
    }

    /// Replace options and apply all changes to subsystems.
    pub fn set_options(&mut self, new: Options) {
        self.options = new;
        self.apply_options();
    }

    /// Push current option values to all subsystems. The highlight material
    /// applies to overlays created afterwards; the BVH leaf size to models
    /// built afterwards.
    pub fn apply_options(&mut self) {
        self.caster = RayCaster::new(&self.options.picking);
        self.highlight.set_material(HighlightMaterial::from_options(
            &self.options.highlight,
        ));
        self.camera.apply_options(&self.options.camera);
        self.input
            .apply_options(&self.options.input, &self.options.keybindings);
    }

    /// Load a named preset from the presets directory.
    /// Returns true on success.
    pub fn load_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match Options::load(&path) {
            Ok(opts) => {
                log::info!("Loaded preset '{name}'");
                self.set_options(opts);
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to load preset '{name}': {e}");
                false
            }
        }
    }

    /// Save the current options as a named preset.
    /// Returns true on success.
    pub fn save_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match self.options.save(&path) {
            Ok(()) => {
                log::info!("Saved preset '{name}'");
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to save preset '{name}': {e}");
                false
            }
        }
    }
}
