use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Picking", inline)]
#[serde(default)]
/// Ray casting parameters.
pub struct PickingOptions {
    /// Hits whose distances differ by no more than this are equidistant and
    /// resolved by model id, then face index.
    #[schemars(title = "Tie Tolerance", range(min = 0.0, max = 0.01), extend("step" = 0.00001))]
    pub tie_epsilon: f32,
    /// Hits further than this from the eye are ignored.
    #[schemars(title = "Max Distance", range(min = 1.0, max = 1000000.0), extend("step" = 1.0))]
    pub max_distance: f32,
    /// Maximum faces per BVH leaf. Applies to models built afterwards.
    #[schemars(skip)]
    pub bvh_leaf_size: usize,
}

impl Default for PickingOptions {
    fn default() -> Self {
        Self {
            tie_epsilon: 1e-5,
            max_distance: 1.0e6,
            bvh_leaf_size: 4,
        }
    }
}
