//! Assembles model geometry from per-element triangle soups.

use std::sync::Arc;

use glam::Vec3;

use super::{ElementId, ElementIndex, ModelGeometry};
use crate::error::PickError;
use crate::geometry::TriangleMesh;
use crate::spatial::{Bvh, SpatialIndex};

/// Outward counter-clockwise triangles over the eight cuboid corners: the
/// min-z ring is 0..4 and the max-z ring 4..8, both starting at min x/y.
const CUBOID_FACES: [[u32; 3]; 12] = [
    [0, 2, 1],
    [0, 3, 2],
    [4, 5, 6],
    [4, 6, 7],
    [0, 1, 5],
    [0, 5, 4],
    [3, 7, 6],
    [3, 6, 2],
    [0, 4, 7],
    [0, 7, 3],
    [1, 2, 6],
    [1, 6, 5],
];

/// Collects element meshes into one merged mesh, remembering which element
/// every appended face came from.
#[derive(Debug, Clone, Default)]
pub struct ModelBuilder {
    name: String,
    positions: Vec<Vec3>,
    triangles: Vec<[u32; 3]>,
    face_elements: Vec<ElementId>,
    /// First out-of-range element-local index seen by `push_element`.
    invalid: Option<String>,
}

impl ModelBuilder {
    /// Start an empty model.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append one element's triangles. `indices` are local to `positions`;
    /// an index outside them is reported by [`build`](Self::build).
    pub fn push_element(
        &mut self,
        element: ElementId,
        positions: &[Vec3],
        indices: &[[u32; 3]],
    ) -> &mut Self {
        let base = self.positions.len() as u32;
        let local_len = positions.len() as u32;
        for tri in indices {
            if self.invalid.is_none() && tri.iter().any(|&i| i >= local_len) {
                self.invalid = Some(format!(
                    "element {element}: face {tri:?} references a vertex \
                     outside {local_len} positions"
                ));
            }
            self.triangles.push(tri.map(|i| base.saturating_add(i)));
            self.face_elements.push(element);
        }
        self.positions.extend_from_slice(positions);
        self
    }

    /// Append an axis-aligned box as twelve outward-facing triangles.
    pub fn push_cuboid(
        &mut self,
        element: ElementId,
        min: Vec3,
        max: Vec3,
    ) -> &mut Self {
        let corners = [
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(max.x, max.y, max.z),
            Vec3::new(min.x, max.y, max.z),
        ];
        self.push_element(element, &corners, &CUBOID_FACES)
    }

    /// Number of faces appended so far.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.triangles.len()
    }

    /// Validate the merged mesh and build its BVH and element index.
    ///
    /// # Errors
    ///
    /// Returns [`PickError::ModelBuild`] if any face references a vertex that
    /// was never pushed.
    pub fn build(
        self,
        leaf_size: usize,
    ) -> Result<Arc<ModelGeometry>, PickError> {
        if let Some(reason) = self.invalid {
            return Err(PickError::ModelBuild(format!(
                "model '{}': {reason}",
                self.name
            )));
        }
        let mesh = TriangleMesh::new(self.positions, self.triangles);
        if let Some(face) = mesh.first_invalid_face() {
            return Err(PickError::ModelBuild(format!(
                "model '{}': face {face} ({:?}) references a vertex outside \
                 {} positions",
                self.name,
                mesh.triangles[face],
                mesh.positions.len()
            )));
        }

        let bvh = Bvh::build(&mesh, leaf_size);
        let elements = ElementIndex::from_face_elements(self.face_elements);
        log::debug!(
            "built model '{}': {} faces, {} elements, {} bvh nodes (depth {}), \
             bounds {:?}",
            self.name,
            mesh.face_count(),
            elements.element_count(),
            bvh.node_count(),
            bvh.depth(),
            bvh.bounds(),
        );
        Ok(Arc::new(ModelGeometry::from_parts(
            self.name, mesh, bvh, elements,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Ray;

    #[test]
    fn elements_keep_their_faces() {
        let mut builder = ModelBuilder::new("room");
        let _ = builder
            .push_cuboid(ElementId(1), Vec3::ZERO, Vec3::ONE)
            .push_cuboid(ElementId(2), Vec3::splat(2.0), Vec3::splat(3.0));
        let geometry = builder.build(4).unwrap();

        assert_eq!(geometry.face_count(), 24);
        assert_eq!(geometry.elements().element_count(), 2);
        assert_eq!(geometry.elements().faces_of(ElementId(1)).len(), 12);
        assert_eq!(geometry.elements().faces_of(ElementId(2))[0], 12);
        assert_eq!(geometry.bounds().max, Vec3::splat(3.0));
        assert_eq!(geometry.name(), "room");
    }

    #[test]
    fn indices_are_rebased_per_element() {
        let tri = [Vec3::ZERO, Vec3::X, Vec3::Y];
        let mut builder = ModelBuilder::new("tris");
        let _ = builder
            .push_element(ElementId(5), &tri, &[[0, 1, 2]])
            .push_element(ElementId(6), &tri, &[[0, 1, 2]]);
        let geometry = builder.build(1).unwrap();
        assert_eq!(geometry.mesh().triangles[1], [3, 4, 5]);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut builder = ModelBuilder::new("broken");
        let _ = builder
            .push_element(
                ElementId(1),
                &[Vec3::ZERO, Vec3::X, Vec3::Y],
                &[[0, 1, 2]],
            )
            .push_element(ElementId(2), &[Vec3::ZERO, Vec3::X], &[[0, 1, 2]]);
        let err = builder.build(4).unwrap_err();
        assert!(matches!(err, PickError::ModelBuild(_)));
        assert!(err.to_string().contains("element #2"));
    }

    #[test]
    fn empty_model_builds_and_never_hits() {
        let geometry = ModelBuilder::new("empty").build(4).unwrap();
        assert!(geometry.is_empty());
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        assert!(geometry
            .spatial_index()
            .cast_nearest(&ray, f32::INFINITY)
            .is_none());
    }

    #[test]
    fn cuboid_faces_point_outward() {
        let mut builder = ModelBuilder::new("box");
        let _ = builder.push_cuboid(ElementId(1), Vec3::splat(-1.0), Vec3::ONE);
        let geometry = builder.build(4).unwrap();
        let mesh = geometry.mesh();
        for face in 0..mesh.face_count() {
            let [a, b, c] = mesh.triangle(face);
            let centroid = (a + b + c) / 3.0;
            assert!(mesh.face_normal(face).dot(centroid) > 0.0, "face {face}");
        }
    }
}
