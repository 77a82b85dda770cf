//! Per-model acceleration structures for ray queries.
//!
//! The ray caster only sees the [`SpatialIndex`] capability: "nearest face
//! along this ray". [`Bvh`] is the implementation built for every model at
//! load time.

mod bvh;

pub use bvh::Bvh;

use crate::geometry::{Aabb, Ray};

/// Nearest-face result of a spatial query, in the index's local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceHit {
    /// Face index in the source mesh.
    pub face: u32,
    /// Distance along the (unit-direction) query ray.
    pub t: f32,
}

/// Opaque nearest-hit-along-ray query over a static triangle set.
pub trait SpatialIndex {
    /// Closest face hit by `ray` no further than `max_distance`.
    ///
    /// Exactly equal distances resolve to the lower face index.
    fn cast_nearest(&self, ray: &Ray, max_distance: f32) -> Option<FaceHit>;

    /// Bounds of everything in the index.
    fn bounds(&self) -> Aabb;
}
