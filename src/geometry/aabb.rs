use glam::{Mat4, Vec3};

use super::Ray;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Inverted box that absorbs anything it is grown by.
    pub const EMPTY: Self = Self {
        min: Vec3::INFINITY,
        max: Vec3::NEG_INFINITY,
    };

    /// Box spanning two corners.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Tight box around one triangle.
    #[must_use]
    pub fn from_triangle(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self {
            min: a.min(b).min(c),
            max: a.max(b).max(c),
        }
    }

    /// Whether the box contains no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x
            || self.min.y > self.max.y
            || self.min.z > self.max.z
    }

    /// Box extended to contain `p`.
    #[must_use]
    pub fn grown(self, p: Vec3) -> Self {
        Self {
            min: self.min.min(p),
            max: self.max.max(p),
        }
    }

    /// Smallest box containing both.
    #[must_use]
    pub fn union(self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Index (0 = x, 1 = y, 2 = z) of the widest extent.
    #[must_use]
    pub fn longest_axis(&self) -> usize {
        let d = self.max - self.min;
        if d.x >= d.y && d.x >= d.z {
            0
        } else if d.y >= d.z {
            1
        } else {
            2
        }
    }

    /// Bounds of the box after an affine transform (all eight corners).
    #[must_use]
    pub fn transformed(&self, m: &Mat4) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        let mut out = Self::EMPTY;
        for i in 0..8 {
            let corner = Vec3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            );
            out = out.grown(m.transform_point3(corner));
        }
        out
    }

    /// Slab test. Returns the entry distance (clamped to zero when the origin
    /// is inside) if the ray meets the box no further than `t_max`.
    ///
    /// `inv_dir` is the component-wise reciprocal of `ray.direction`, hoisted
    /// out so traversal computes it once per ray. Boundaries are closed: a ray
    /// running exactly along a face plane still meets the box.
    #[inline]
    #[must_use]
    pub fn intersect_ray(
        &self,
        ray: &Ray,
        inv_dir: Vec3,
        t_max: f32,
    ) -> Option<f32> {
        if self.is_empty() {
            return None;
        }
        let mut t_enter = 0.0_f32;
        let mut t_exit = t_max;
        for axis in 0..3 {
            let origin = ray.origin[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);
            // Parallel to this slab: inside or never.
            if ray.direction[axis] == 0.0 {
                if origin < lo || origin > hi {
                    return None;
                }
                continue;
            }
            let t1 = (lo - origin) * inv_dir[axis];
            let t2 = (hi - origin) * inv_dir[axis];
            t_enter = t_enter.max(t1.min(t2));
            t_exit = t_exit.min(t1.max(t2));
            if t_enter > t_exit {
                return None;
            }
        }
        Some(t_enter)
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}
