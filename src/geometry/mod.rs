//! Geometric primitives shared by the spatial index and the ray caster.
//!
//! Everything here is plain value math on top of [`glam`]: rays, axis-aligned
//! boxes, indexed triangle meshes and the ray/triangle test.

mod aabb;
mod mesh;
mod ray;

pub use aabb::Aabb;
pub use mesh::TriangleMesh;
pub use ray::{ray_triangle_intersect, Ray, TriangleHit};
