use crate::geometry::{Aabb, TriangleMesh};
use crate::model::ElementIndex;
use crate::spatial::{Bvh, SpatialIndex};

/// Immutable per-model geometry: the merged triangle mesh, its spatial index
/// and the face → element table. Built once and shared by every placed
/// instance through an `Arc`.
#[derive(Debug, Clone)]
pub struct ModelGeometry {
    name: String,
    mesh: TriangleMesh,
    bvh: Bvh,
    elements: ElementIndex,
}

impl ModelGeometry {
    pub(crate) fn from_parts(
        name: String,
        mesh: TriangleMesh,
        bvh: Bvh,
        elements: ElementIndex,
    ) -> Self {
        Self {
            name,
            mesh,
            bvh,
            elements,
        }
    }

    /// Human-readable asset name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Merged triangle mesh in model-local space.
    #[must_use]
    pub fn mesh(&self) -> &TriangleMesh {
        &self.mesh
    }

    /// Nearest-hit query capability over the mesh.
    #[must_use]
    pub fn spatial_index(&self) -> &dyn SpatialIndex {
        &self.bvh
    }

    /// Face → element table.
    #[must_use]
    pub fn elements(&self) -> &ElementIndex {
        &self.elements
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.mesh.face_count()
    }

    /// Whether there is nothing to hit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mesh.is_empty()
    }

    /// Local-space bounds.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        self.bvh.bounds()
    }
}
