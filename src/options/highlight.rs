use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Highlight", inline)]
#[serde(default)]
/// Appearance of the hover highlight overlay.
pub struct HighlightOptions {
    /// Overlay color (linear RGB).
    #[schemars(title = "Color")]
    pub color: [f32; 3],
    /// Overlay opacity.
    #[schemars(title = "Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub opacity: f32,
    /// Whether the overlay is hidden by geometry in front of it.
    #[schemars(title = "Depth Test")]
    pub depth_test: bool,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            color: [1.0, 0.533, 1.0],
            opacity: 0.6,
            depth_test: false,
        }
    }
}
