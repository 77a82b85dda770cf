//! Camera and viewport: everything needed to turn a pointer position into a
//! world-space ray.

/// Perspective camera.
pub mod core;
/// Viewport rectangle and pixel → NDC normalization.
pub mod viewport;

pub use self::core::Camera;
pub use viewport::Viewport;
