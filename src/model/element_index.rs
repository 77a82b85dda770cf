//! Face → element lookup built once per model.

use rustc_hash::FxHashMap;

use super::ElementId;

/// Bidirectional mapping between mesh faces and the elements that own them.
///
/// The forward direction is a dense table indexed by face, so resolving a
/// hit is a single array read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementIndex {
    face_elements: Vec<ElementId>,
    element_faces: FxHashMap<ElementId, Vec<u32>>,
}

impl ElementIndex {
    /// Build from the owning element of every face, in face order.
    #[must_use]
    pub fn from_face_elements(face_elements: Vec<ElementId>) -> Self {
        let mut element_faces: FxHashMap<ElementId, Vec<u32>> =
            FxHashMap::default();
        for (face, &element) in face_elements.iter().enumerate() {
            element_faces.entry(element).or_default().push(face as u32);
        }
        Self {
            face_elements,
            element_faces,
        }
    }

    /// Number of faces covered.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.face_elements.len()
    }

    /// Number of distinct elements.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.element_faces.len()
    }

    /// Element owning `face`, or `None` if the face does not exist.
    #[inline]
    #[must_use]
    pub fn get(&self, face: u32) -> Option<ElementId> {
        self.face_elements.get(face as usize).copied()
    }

    /// Element owning `face`.
    ///
    /// # Panics
    ///
    /// Panics if `face` is outside the indexed geometry. Callers obtain face
    /// indices from the same model's spatial index, so an out-of-range face
    /// means the hit and the model disagree.
    #[inline]
    #[must_use]
    #[track_caller]
    pub fn element_of(&self, face: u32) -> ElementId {
        assert!(
            (face as usize) < self.face_elements.len(),
            "face {face} out of range for a model with {} faces",
            self.face_elements.len()
        );
        self.face_elements[face as usize]
    }

    /// All faces belonging to `element`, ascending. Empty if unknown.
    #[must_use]
    pub fn faces_of(&self, element: ElementId) -> &[u32] {
        self.element_faces.get(&element).map_or(&[], Vec::as_slice)
    }

    /// Whether `element` owns at least one face.
    #[must_use]
    pub fn contains(&self, element: ElementId) -> bool {
        self.element_faces.contains_key(&element)
    }

    /// Every element id, in no particular order.
    pub fn elements(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.element_faces.keys().copied()
    }
}
