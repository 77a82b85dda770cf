use glam::Vec3;

use super::Aabb;

/// Indexed triangle mesh. Face `i` is `triangles[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Vertex indices, three per face.
    pub triangles: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Wrap positions and faces without validation.
    #[must_use]
    pub fn new(positions: Vec<Vec3>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            positions,
            triangles,
        }
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.triangles.len()
    }

    /// Whether the mesh has no faces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// The three corners of `face`.
    ///
    /// # Panics
    ///
    /// Panics if `face` or one of its vertex indices is out of range.
    #[must_use]
    pub fn triangle(&self, face: usize) -> [Vec3; 3] {
        let [a, b, c] = self.triangles[face];
        [
            self.positions[a as usize],
            self.positions[b as usize],
            self.positions[c as usize],
        ]
    }

    /// First face referencing a vertex that does not exist, if any.
    #[must_use]
    pub fn first_invalid_face(&self) -> Option<usize> {
        let vertex_count = self.positions.len();
        self.triangles
            .iter()
            .position(|tri| tri.iter().any(|&i| i as usize >= vertex_count))
    }

    /// Bounds of all referenced vertices.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        self.triangles
            .iter()
            .flatten()
            .fold(Aabb::EMPTY, |acc, &i| acc.grown(self.positions[i as usize]))
    }

    /// Unit normal of `face` following counter-clockwise winding, or zero for
    /// a degenerate face.
    #[must_use]
    pub fn face_normal(&self, face: usize) -> Vec3 {
        let [a, b, c] = self.triangle(face);
        (b - a).cross(c - a).normalize_or_zero()
    }
}
