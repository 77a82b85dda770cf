use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::geometry::Ray;
use crate::model::{ElementId, ModelId};

/// Closest intersection of a pointer ray with the loaded models.
///
/// Produced and consumed within one event turn; never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Model that was hit.
    pub model_id: ModelId,
    /// Face index within that model's mesh.
    pub face_index: u32,
    /// World-space distance from the ray origin to the hit point.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
    /// World-space ray that produced the hit.
    pub ray: Ray,
}

/// What is under the pointer: an element scoped to its model.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct Selection {
    /// Owning model.
    pub model_id: ModelId,
    /// Element within that model.
    pub element_id: ElementId,
}

impl Selection {
    /// Pair an element with its model.
    #[must_use]
    pub fn new(model_id: ModelId, element_id: ElementId) -> Self {
        Self {
            model_id,
            element_id,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "model {} element {}", self.model_id, self.element_id)
    }
}
