//! The engine's complete interactive vocabulary.
//!
//! Every pointer or keyboard operation is represented as a `PickCommand`.
//! Consumers construct commands (usually through the
//! [`InputProcessor`](crate::input::InputProcessor)) and pass them to
//! [`PickingEngine::execute`](super::PickingEngine::execute).

use glam::Vec2;

/// A discrete picking operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickCommand {
    /// Pointer is at `position`; highlight whatever is under it.
    Hover {
        /// Pointer position in viewport pixel space.
        position: Vec2,
    },
    /// Pointer is gone; drop the highlight.
    ClearHover,
    /// Click at `position`; select what is under it, or clear the
    /// selection over empty space.
    Select {
        /// Pointer position in viewport pixel space.
        position: Vec2,
    },
    /// Forget the clicked selection.
    ClearSelection,
}
