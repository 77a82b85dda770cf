use super::{Hit, Selection};
use crate::model::ModelSet;

/// Map a hit to the element owning the hit face.
///
/// Pure and O(1): one hash lookup for the model, one array read for the
/// face.
///
/// # Panics
///
/// Panics if the hit's model is not in `models` or its face index is
/// outside that model's geometry. Both mean the hit was not produced by a
/// cast over this model set.
#[must_use]
#[track_caller]
#[allow(clippy::panic)]
pub fn resolve(hit: &Hit, models: &ModelSet) -> Selection {
    let Some(model) = models.get(hit.model_id) else {
        panic!("hit references model {} which is not loaded", hit.model_id);
    };
    let element_id = model.geometry().elements().element_of(hit.face_index);
    Selection::new(hit.model_id, element_id)
}
