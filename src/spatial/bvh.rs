//! Bounding volume hierarchy over an arena of triangles.
//!
//! Built once, top-down, by splitting at the centroid median along the
//! widest axis. Nodes live in a flat `Vec` and leaves reference contiguous
//! runs of a triangle arena that is reordered to match, so a leaf visit reads
//! adjacent memory.

use glam::Vec3;

use super::{FaceHit, SpatialIndex};
use crate::geometry::{ray_triangle_intersect, Aabb, Ray, TriangleMesh};

#[derive(Debug, Clone, Copy)]
enum NodeKind {
    Leaf { start: u32, count: u32 },
    Inner { left: u32, right: u32 },
}

#[derive(Debug, Clone, Copy)]
struct Node {
    bounds: Aabb,
    kind: NodeKind,
}

struct BuildItem {
    face: u32,
    bounds: Aabb,
    centroid: Vec3,
}

/// Static BVH answering nearest-hit ray queries.
#[derive(Debug, Clone, Default)]
pub struct Bvh {
    nodes: Vec<Node>,
    /// Triangle corners in leaf order.
    triangles: Vec<[Vec3; 3]>,
    /// Source face index for each arena slot.
    faces: Vec<u32>,
}

impl Bvh {
    /// Build over every face of `mesh`, with at most `leaf_size` faces per
    /// leaf (clamped to at least one).
    ///
    /// # Panics
    ///
    /// Panics if a face references a vertex outside `mesh.positions`.
    #[must_use]
    pub fn build(mesh: &TriangleMesh, leaf_size: usize) -> Self {
        let leaf_size = leaf_size.max(1);
        let mut items: Vec<BuildItem> = (0..mesh.face_count())
            .map(|face| {
                let [a, b, c] = mesh.triangle(face);
                BuildItem {
                    face: face as u32,
                    bounds: Aabb::from_triangle(a, b, c),
                    centroid: (a + b + c) / 3.0,
                }
            })
            .collect();

        let mut bvh = Self {
            nodes: Vec::with_capacity(2 * items.len().div_ceil(leaf_size)),
            triangles: Vec::with_capacity(items.len()),
            faces: Vec::with_capacity(items.len()),
        };
        if !items.is_empty() {
            let _root = bvh.build_node(mesh, &mut items, leaf_size);
        }
        bvh
    }

    fn build_node(
        &mut self,
        mesh: &TriangleMesh,
        items: &mut [BuildItem],
        leaf_size: usize,
    ) -> u32 {
        let bounds = items
            .iter()
            .fold(Aabb::EMPTY, |acc, item| acc.union(&item.bounds));
        let index = self.nodes.len() as u32;

        if items.len() <= leaf_size {
            let start = self.faces.len() as u32;
            for item in items.iter() {
                self.faces.push(item.face);
                self.triangles.push(mesh.triangle(item.face as usize));
            }
            self.nodes.push(Node {
                bounds,
                kind: NodeKind::Leaf {
                    start,
                    count: items.len() as u32,
                },
            });
            return index;
        }

        let axis = items
            .iter()
            .fold(Aabb::EMPTY, |acc, item| acc.grown(item.centroid))
            .longest_axis();
        let mid = items.len() / 2;
        let _ = items.select_nth_unstable_by(mid, |a, b| {
            a.centroid[axis].total_cmp(&b.centroid[axis])
        });

        // Placeholder until both children have been placed.
        self.nodes.push(Node {
            bounds,
            kind: NodeKind::Inner { left: 0, right: 0 },
        });
        let (lower, upper) = items.split_at_mut(mid);
        let left = self.build_node(mesh, lower, leaf_size);
        let right = self.build_node(mesh, upper, leaf_size);
        self.nodes[index as usize].kind = NodeKind::Inner { left, right };
        index
    }

    /// Number of indexed faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of tree nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Longest root-to-leaf path (a single leaf has depth 1).
    #[must_use]
    pub fn depth(&self) -> usize {
        if self.nodes.is_empty() {
            return 0;
        }
        let mut deepest = 0;
        let mut stack = vec![(0u32, 1usize)];
        while let Some((idx, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            if let NodeKind::Inner { left, right } =
                self.nodes[idx as usize].kind
            {
                stack.push((left, depth + 1));
                stack.push((right, depth + 1));
            }
        }
        deepest
    }

    fn test_leaf(
        &self,
        ray: &Ray,
        start: u32,
        count: u32,
        limit: f32,
        best: &mut Option<FaceHit>,
    ) {
        for slot in start..start + count {
            let [a, b, c] = self.triangles[slot as usize];
            let Some(hit) = ray_triangle_intersect(ray, a, b, c) else {
                continue;
            };
            if hit.t > limit {
                continue;
            }
            let face = self.faces[slot as usize];
            let closer = best.is_none_or(|current| {
                hit.t < current.t || (hit.t == current.t && face < current.face)
            });
            if closer {
                *best = Some(FaceHit { face, t: hit.t });
            }
        }
    }
}

impl SpatialIndex for Bvh {
    fn cast_nearest(&self, ray: &Ray, max_distance: f32) -> Option<FaceHit> {
        let root = self.nodes.first()?;
        if ray.is_degenerate() {
            return None;
        }
        let inv_dir = ray.direction.recip();
        let root_t = root.bounds.intersect_ray(ray, inv_dir, max_distance)?;

        let mut best: Option<FaceHit> = None;
        let mut stack = vec![(0u32, root_t)];
        while let Some((idx, t_enter)) = stack.pop() {
            // Nodes entered exactly at the current best distance are still
            // visited so an equidistant lower face index can win.
            let limit = best.map_or(max_distance, |hit| hit.t);
            if t_enter > limit {
                continue;
            }
            match self.nodes[idx as usize].kind {
                NodeKind::Leaf { start, count } => {
                    self.test_leaf(ray, start, count, limit, &mut best);
                }
                NodeKind::Inner { left, right } => {
                    let near = |child: u32| {
                        self.nodes[child as usize]
                            .bounds
                            .intersect_ray(ray, inv_dir, limit)
                            .map(|t| (child, t))
                    };
                    match (near(left), near(right)) {
                        (Some(l), Some(r)) => {
                            // Pop the nearer child first.
                            if l.1 <= r.1 {
                                stack.push(r);
                                stack.push(l);
                            } else {
                                stack.push(l);
                                stack.push(r);
                            }
                        }
                        (Some(only), None) | (None, Some(only)) => {
                            stack.push(only);
                        }
                        (None, None) => {}
                    }
                }
            }
        }
        best
    }

    fn bounds(&self) -> Aabb {
        self.nodes.first().map_or(Aabb::EMPTY, |root| root.bounds)
    }
}
