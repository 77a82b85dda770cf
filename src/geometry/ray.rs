use glam::{Mat4, Vec3};

/// A half-line starting at `origin` and extending along a unit `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Unit-length direction (zero only for a degenerate ray).
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray, normalizing `direction`.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray.
    #[inline]
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Map the ray through an affine transform.
    ///
    /// The direction is re-normalized, so parameter values are only
    /// preserved when `m` carries no scale.
    #[must_use]
    pub fn transformed(&self, m: &Mat4) -> Self {
        Self::new(
            m.transform_point3(self.origin),
            m.transform_vector3(self.direction),
        )
    }

    /// Whether the direction collapsed to zero (e.g. NaN camera input).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.direction == Vec3::ZERO
    }
}

/// Parametric result of a ray/triangle intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleHit {
    /// Distance along the ray.
    pub t: f32,
    /// First barycentric coordinate (weight of the second vertex).
    pub u: f32,
    /// Second barycentric coordinate (weight of the third vertex).
    pub v: f32,
}

/// Determinant magnitude below which the ray counts as parallel.
const PARALLEL_EPSILON: f32 = 1e-10;

/// Möller–Trumbore ray/triangle intersection.
///
/// Triangles are double sided. Intersections at or behind the ray origin are
/// rejected.
#[must_use]
pub fn ray_triangle_intersect(
    ray: &Ray,
    a: Vec3,
    b: Vec3,
    c: Vec3,
) -> Option<TriangleHit> {
    let edge1 = b - a;
    let edge2 = c - a;

    let pvec = ray.direction.cross(edge2);
    let det = edge1.dot(pvec);
    if det.abs() < PARALLEL_EPSILON {
        return None;
    }

    let inv_det = 1.0 / det;
    let tvec = ray.origin - a;

    let u = tvec.dot(pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let qvec = tvec.cross(edge1);
    let v = ray.direction.dot(qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(qvec) * inv_det;
    (t > 0.0).then_some(TriangleHit { t, u, v })
}
