use std::sync::Arc;

use glam::Mat4;
use rustc_hash::FxHashMap;

use super::{Model, ModelGeometry, ModelId};

/// Registry of loaded models, in load order.
///
/// Models are only ever appended while a set is live; replacing the whole
/// set goes through [`clear`](Self::clear). Ids keep counting across clears,
/// so an id from a previous set never aliases a new model.
#[derive(Debug, Clone, Default)]
pub struct ModelSet {
    models: Vec<Model>,
    by_id: FxHashMap<ModelId, usize>,
    next_id: u32,
    /// Monotonically increasing generation; bumped on any mutation.
    generation: u64,
}

impl ModelSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Place `geometry` in the world with `transform`. Returns the new
    /// model's id.
    pub fn add_instance(
        &mut self,
        geometry: Arc<ModelGeometry>,
        transform: Mat4,
    ) -> ModelId {
        let id = ModelId(self.next_id);
        self.next_id += 1;
        log::debug!(
            "model {id}: instance of '{}' ({} faces) at {:?}",
            geometry.name(),
            geometry.face_count(),
            transform.w_axis.truncate(),
        );
        let _ = self.by_id.insert(id, self.models.len());
        self.models.push(Model::new(id, geometry, transform));
        self.invalidate();
        id
    }

    /// Look up a model by id.
    #[must_use]
    pub fn get(&self, id: ModelId) -> Option<&Model> {
        self.by_id.get(&id).map(|&idx| &self.models[idx])
    }

    /// Check if a model exists.
    #[must_use]
    pub fn contains(&self, id: ModelId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// All models in load order.
    #[must_use]
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// Number of loaded models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether no model is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Current generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Remove every model.
    pub fn clear(&mut self) {
        self.models.clear();
        self.by_id.clear();
        self.invalidate();
    }
}
