//! Model management methods for PickingEngine

use std::sync::Arc;

use glam::Mat4;

use super::PickingEngine;
use crate::error::PickError;
use crate::highlight::OverlayRenderer;
use crate::model::{ModelBuilder, ModelGeometry, ModelId};

impl<R: OverlayRenderer> PickingEngine<R> {
    /// Build geometry with the configured BVH leaf size.
    ///
    /// # Errors
    ///
    /// Returns [`PickError::ModelBuild`] if the builder holds invalid
    /// indices.
    pub fn build_geometry(
        &self,
        builder: ModelBuilder,
    ) -> Result<Arc<ModelGeometry>, PickError> {
        builder.build(self.options.picking.bvh_leaf_size)
    }

    /// Place `geometry` in the world. The new model is pickable from the next
    /// event on; the current highlight is left alone.
    pub fn add_instance(
        &mut self,
        geometry: Arc<ModelGeometry>,
        transform: Mat4,
    ) -> ModelId {
        self.models.add_instance(geometry, transform)
    }

    /// Swap the whole model set. The highlight is cleared before the old
    /// models go away, and the click selection is dropped.
    pub fn replace_models(
        &mut self,
        instances: impl IntoIterator<Item = (Arc<ModelGeometry>, Mat4)>,
    ) -> Vec<ModelId> {
        let _ = self.highlight.reset();
        self.selection = None;
        self.models.clear();
        let ids: Vec<ModelId> = instances
            .into_iter()
            .map(|(geometry, transform)| {
                self.models.add_instance(geometry, transform)
            })
            .collect();
        log::debug!("model set replaced: {} instances", ids.len());
        ids
    }
}
