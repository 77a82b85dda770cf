use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Pointer gesture parameters.
pub struct InputOptions {
    /// Pointer travel in pixels between press and release beyond which the
    /// gesture is a camera drag rather than a click.
    #[schemars(title = "Drag Threshold", range(min = 0.0, max = 32.0), extend("step" = 1.0))]
    pub drag_threshold: f32,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            drag_threshold: 4.0,
        }
    }
}
