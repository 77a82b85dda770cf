//! Hover highlighting: the controller state machine, the overlay renderer
//! contract it drives, and an in-memory renderer.

mod controller;
mod layer;
mod overlay;
mod subset;

pub use controller::{HighlightController, HighlightState, Transition};
pub use layer::{OverlayStats, SubsetOverlayLayer};
pub use overlay::{
    HighlightMaterial, OverlayError, OverlayHandle, OverlayRenderer,
    OverlayRequest,
};
pub use subset::{OverlayVertex, SubsetMesh};
