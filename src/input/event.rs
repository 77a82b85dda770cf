/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`PickCommand`](crate::engine::PickCommand) values.
///
/// # Example
///
/// ```ignore
/// let cmd = input_processor.handle_event(&InputEvent::CursorMoved {
///     x: 100.0,
///     y: 200.0,
/// });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to a position in the viewport's pixel space.
    CursorMoved {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels (grows downward).
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Cursor left the viewport.
    CursorLeft,
    /// Key pressed.
    Key {
        /// Physical key string in `winit::keyboard::KeyCode` debug format
        /// (`"Escape"`, `"KeyH"`, ...).
        code: String,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::keyboard::KeyCode> for InputEvent {
    fn from(code: winit::keyboard::KeyCode) -> Self {
        Self::Key {
            code: format!("{code:?}"),
        }
    }
}
