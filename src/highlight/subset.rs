//! Standalone mesh for one element's faces.

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::geometry::TriangleMesh;

/// GPU-ready overlay vertex.
///
/// 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct OverlayVertex {
    /// Model-local position.
    pub position: [f32; 3],
    /// Area-weighted vertex normal.
    pub normal: [f32; 3],
}

/// Compact indexed mesh holding only the vertices a face subset touches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubsetMesh {
    /// Vertices, in first-use order.
    pub vertices: Vec<OverlayVertex>,
    /// Triangle list indices into `vertices`.
    pub indices: Vec<u32>,
}

impl SubsetMesh {
    /// Extract `faces` of `mesh`, remapping shared vertices.
    ///
    /// # Panics
    ///
    /// Panics if a face index is out of range for `mesh`.
    #[must_use]
    pub fn from_faces(mesh: &TriangleMesh, faces: &[u32]) -> Self {
        let mut remap: FxHashMap<u32, u32> = FxHashMap::default();
        let mut positions: Vec<Vec3> = Vec::new();
        let mut normals: Vec<Vec3> = Vec::new();
        let mut indices = Vec::with_capacity(faces.len() * 3);

        for &face in faces {
            let tri = mesh.triangles[face as usize];
            let [a, b, c] = mesh.triangle(face as usize);
            // Unnormalized cross product weights by area.
            let weighted = (b - a).cross(c - a);
            for source in tri {
                let local = *remap.entry(source).or_insert_with(|| {
                    positions.push(mesh.positions[source as usize]);
                    normals.push(Vec3::ZERO);
                    positions.len() as u32 - 1
                });
                normals[local as usize] += weighted;
                indices.push(local);
            }
        }

        let vertices = positions
            .iter()
            .zip(&normals)
            .map(|(p, n)| OverlayVertex {
                position: p.to_array(),
                normal: n.normalize_or_zero().to_array(),
            })
            .collect();
        Self { vertices, indices }
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Vertex data as raw bytes for buffer upload.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as raw bytes for buffer upload.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
