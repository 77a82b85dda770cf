//! Boundary contract with the host's overlay renderer.

use std::fmt;

use glam::Mat4;

use super::SubsetMesh;
use crate::model::{ElementId, ModelId};
use crate::options::HighlightOptions;

/// Opaque token for one live overlay, issued by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayHandle(pub u64);

impl fmt::Display for OverlayHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "overlay {}", self.0)
    }
}

/// Failure reported by an overlay renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayError {
    /// The renderer refused to materialize the overlay.
    Rejected(String),
    /// The handle does not name a live overlay.
    UnknownHandle(OverlayHandle),
}

impl fmt::Display for OverlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(reason) => write!(f, "overlay rejected: {reason}"),
            Self::UnknownHandle(handle) => write!(f, "unknown {handle}"),
        }
    }
}

impl std::error::Error for OverlayError {}

/// Surface appearance of the highlight overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightMaterial {
    /// Linear RGB color.
    pub color: [f32; 3],
    /// Opacity in [0, 1].
    pub opacity: f32,
    /// Whether geometry in front hides the overlay.
    pub depth_test: bool,
}

impl HighlightMaterial {
    /// Material described by the highlight options.
    #[must_use]
    pub fn from_options(options: &HighlightOptions) -> Self {
        Self {
            color: options.color,
            opacity: options.opacity.clamp(0.0, 1.0),
            depth_test: options.depth_test,
        }
    }

    /// Color with opacity as alpha.
    #[must_use]
    pub fn rgba(&self) -> [f32; 4] {
        let [r, g, b] = self.color;
        [r, g, b, self.opacity]
    }
}

impl Default for HighlightMaterial {
    fn default() -> Self {
        Self::from_options(&HighlightOptions::default())
    }
}

/// Everything a renderer needs to draw one element highlighted.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayRequest {
    /// Owning model.
    pub model_id: ModelId,
    /// Highlighted element.
    pub element_id: ElementId,
    /// Model-local → world transform of the owning model.
    pub transform: Mat4,
    /// The element's faces as a standalone mesh, in model-local space.
    pub subset: SubsetMesh,
    /// Appearance.
    pub material: HighlightMaterial,
}

/// Materializes and removes highlight overlays in the host scene.
///
/// Both calls are synchronous. The highlight controller holds at most one
/// handle at a time and destroys it before creating the next.
pub trait OverlayRenderer {
    /// Add an overlay to the scene.
    ///
    /// # Errors
    ///
    /// Returns an [`OverlayError`] if the overlay could not be created.
    fn create_overlay(
        &mut self,
        request: OverlayRequest,
    ) -> Result<OverlayHandle, OverlayError>;

    /// Remove a previously created overlay.
    ///
    /// # Errors
    ///
    /// Returns an [`OverlayError`] if the overlay could not be removed.
    fn destroy_overlay(
        &mut self,
        handle: OverlayHandle,
    ) -> Result<(), OverlayError>;
}
