//! Hover highlight state machine.
//!
//! Driven once per pointer event with the selection under the pointer (or
//! `None`). It issues the overlay renderer the minimum create/destroy calls
//! needed to keep exactly the current selection highlighted.

use super::{
    HighlightMaterial, OverlayError, OverlayHandle, OverlayRenderer,
    OverlayRequest, SubsetMesh,
};
use crate::model::ModelSet;
use crate::picking::Selection;

/// What the controller is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightState {
    /// No highlight.
    #[default]
    Idle,
    /// One element is highlighted.
    Highlighting(Selection),
}

impl HighlightState {
    /// The highlighted selection, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        match *self {
            Self::Idle => None,
            Self::Highlighting(selection) => Some(selection),
        }
    }

    /// Whether nothing is highlighted.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Side effect of one [`HighlightController::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed; no renderer calls were made.
    Unchanged,
    /// An overlay was created from idle.
    Created,
    /// The old overlay was destroyed and a new one created.
    Replaced,
    /// The overlay was destroyed.
    Cleared,
    /// The renderer failed; the controller is now idle.
    Failed,
}

/// Owns the one highlight and the renderer that draws it.
///
/// An overlay the renderer refused to destroy is kept as an orphan and
/// destroyed before anything else is created, so a failed destroy never
/// leaves a second overlay behind. While an orphan exists the controller is
/// idle.
#[derive(Debug)]
pub struct HighlightController<R> {
    renderer: R,
    state: HighlightState,
    handle: Option<OverlayHandle>,
    orphan: Option<OverlayHandle>,
    material: HighlightMaterial,
}

impl<R: OverlayRenderer> HighlightController<R> {
    /// Idle controller drawing through `renderer`.
    #[must_use]
    pub fn new(renderer: R, material: HighlightMaterial) -> Self {
        Self {
            renderer,
            state: HighlightState::Idle,
            handle: None,
            orphan: None,
            material,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> HighlightState {
        self.state
    }

    /// Handle of the live overlay, if any.
    #[must_use]
    pub fn handle(&self) -> Option<OverlayHandle> {
        self.handle
    }

    /// Overlay whose destruction failed and is still pending.
    #[must_use]
    pub fn orphan(&self) -> Option<OverlayHandle> {
        self.orphan
    }

    /// The renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the renderer, e.g. for the host's draw pass.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Material used for overlays created from now on.
    pub fn set_material(&mut self, material: HighlightMaterial) {
        self.material = material;
    }

    /// Material used for new overlays.
    #[must_use]
    pub fn material(&self) -> HighlightMaterial {
        self.material
    }

    /// Move the highlight to `selection`.
    ///
    /// Repeating the current selection is a no-op. A different selection
    /// destroys the old overlay before creating the new one, within this
    /// call. Renderer failures leave the controller idle. A pending orphan is
    /// destroyed first; if that fails again nothing new is created.
    pub fn update(
        &mut self,
        selection: Option<Selection>,
        models: &ModelSet,
    ) -> Transition {
        let swept = match self.destroy_orphan() {
            Ok(swept) => swept,
            Err(e) => {
                log::warn!("orphaned overlay still alive: {e}");
                return Transition::Failed;
            }
        };
        if self.state.selection() == selection {
            return if swept {
                Transition::Cleared
            } else {
                Transition::Unchanged
            };
        }
        let was_highlighting = !self.state.is_idle();
        if was_highlighting {
            if let Err(e) = self.destroy_current() {
                log::warn!("highlight cleared after destroy failure: {e}");
                return Transition::Failed;
            }
        }
        let Some(selection) = selection else {
            log::debug!("highlight cleared");
            return Transition::Cleared;
        };
        match self.create(selection, models) {
            Ok(()) => {
                log::debug!("highlighting {selection}");
                if was_highlighting {
                    Transition::Replaced
                } else {
                    Transition::Created
                }
            }
            Err(e) => {
                log::warn!("cannot highlight {selection}: {e}");
                Transition::Failed
            }
        }
    }

    /// Drop any highlight, e.g. when the pointer leaves the viewport or the
    /// model set is replaced.
    pub fn reset(&mut self) -> Transition {
        let swept = match self.destroy_orphan() {
            Ok(swept) => swept,
            Err(e) => {
                log::warn!("orphaned overlay still alive: {e}");
                return Transition::Failed;
            }
        };
        if self.state.is_idle() {
            return if swept {
                Transition::Cleared
            } else {
                Transition::Unchanged
            };
        }
        match self.destroy_current() {
            Ok(()) => Transition::Cleared,
            Err(e) => {
                log::warn!("highlight reset after destroy failure: {e}");
                Transition::Failed
            }
        }
    }

    /// Destroy the live overlay. The controller is idle afterwards either
    /// way; a handle the renderer refused becomes the orphan.
    fn destroy_current(&mut self) -> Result<(), OverlayError> {
        self.state = HighlightState::Idle;
        let Some(handle) = self.handle.take() else {
            return Ok(());
        };
        if let Err(e) = self.renderer.destroy_overlay(handle) {
            self.orphan = Some(handle);
            return Err(e);
        }
        Ok(())
    }

    /// Destroy the orphan, if any. Returns whether one was destroyed. A
    /// renderer that no longer knows the handle has nothing left to remove.
    fn destroy_orphan(&mut self) -> Result<bool, OverlayError> {
        let Some(handle) = self.orphan.take() else {
            return Ok(false);
        };
        match self.renderer.destroy_overlay(handle) {
            Ok(()) | Err(OverlayError::UnknownHandle(_)) => {
                log::debug!("destroyed orphaned overlay {handle}");
                Ok(true)
            }
            Err(e) => {
                self.orphan = Some(handle);
                Err(e)
            }
        }
    }

    fn create(
        &mut self,
        selection: Selection,
        models: &ModelSet,
    ) -> Result<(), OverlayError> {
        let model = models.get(selection.model_id).ok_or_else(|| {
            OverlayError::Rejected(format!(
                "model {} is not loaded",
                selection.model_id
            ))
        })?;
        let geometry = model.geometry();
        let faces = geometry.elements().faces_of(selection.element_id);
        let request = OverlayRequest {
            model_id: selection.model_id,
            element_id: selection.element_id,
            transform: model.transform(),
            subset: SubsetMesh::from_faces(geometry.mesh(), faces),
            material: self.material,
        };
        let handle = self.renderer.create_overlay(request)?;
        self.handle = Some(handle);
        self.state = HighlightState::Highlighting(selection);
        Ok(())
    }
}
