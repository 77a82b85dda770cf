use std::sync::Arc;

use glam::Mat4;

use super::{ModelGeometry, ModelId};
use crate::geometry::Aabb;

/// A loaded model placed in the world: shared geometry plus a transform.
#[derive(Debug, Clone)]
pub struct Model {
    id: ModelId,
    geometry: Arc<ModelGeometry>,
    transform: Mat4,
    inverse: Mat4,
}

impl Model {
    pub(crate) fn new(
        id: ModelId,
        geometry: Arc<ModelGeometry>,
        transform: Mat4,
    ) -> Self {
        Self {
            id,
            geometry,
            transform,
            inverse: transform.inverse(),
        }
    }

    /// Identifier, unique among loaded models.
    #[must_use]
    pub fn id(&self) -> ModelId {
        self.id
    }

    /// Shared geometry.
    #[must_use]
    pub fn geometry(&self) -> &Arc<ModelGeometry> {
        &self.geometry
    }

    /// Model-local → world transform.
    #[must_use]
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    /// World → model-local transform.
    #[must_use]
    pub fn inverse_transform(&self) -> Mat4 {
        self.inverse
    }

    /// World-space bounds of the placed geometry.
    #[must_use]
    pub fn world_bounds(&self) -> Aabb {
        self.geometry.bounds().transformed(&self.transform)
    }
}
