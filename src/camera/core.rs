use glam::{Mat4, Vec2, Vec3};

use crate::geometry::Ray;
use crate::options::CameraOptions;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default(), 1.0)
    }
}

impl Camera {
    /// Camera on the +Z axis at `eye_z`, looking at the origin.
    #[must_use]
    pub fn from_options(options: &CameraOptions, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, options.eye_z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Apply projection parameters from options, keeping the current pose.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.fovy = options.fovy;
        self.znear = options.znear;
        self.zfar = options.zfar;
    }

    /// Build the view matrix.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Build the projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh uses the [0,1] depth range
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }

    /// World-space ray from the eye through a point given in normalized
    /// device coordinates (both axes in [-1, 1], +Y up).
    #[must_use]
    pub fn ray_through_ndc(&self, ndc: Vec2) -> Ray {
        let inv_view_proj = self.build_matrix().inverse();
        let far = inv_view_proj.project_point3(ndc.extend(1.0));
        Ray::new(self.eye, far - self.eye)
    }

    /// Unit forward direction (eye toward target).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }
}
