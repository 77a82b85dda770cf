//! Converts raw platform events into picking commands.
//!
//! The `InputProcessor` owns all transient input state (mouse tracking,
//! click/drag detection) and the key-binding map. It is the only thing that
//! sits between raw window events and the engine's
//! [`execute`](crate::engine::PickingEngine::execute) method.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::event::{InputEvent, MouseButton};
use super::mouse::{ClickResult, InputState};
use crate::engine::PickCommand;
use crate::options::{InputOptions, KeybindingOptions};

/// Engine-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// clear_selection = "Escape"
/// clear_highlight = "KeyH"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Forget the clicked selection.
    ClearSelection,
    /// Drop the hover highlight until the pointer moves again.
    ClearHighlight,
}

impl KeyAction {
    /// Convert to the corresponding [`PickCommand`].
    fn to_command(self) -> PickCommand {
        match self {
            Self::ClearSelection => PickCommand::ClearSelection,
            Self::ClearHighlight => PickCommand::ClearHover,
        }
    }
}

/// Converts raw window events into [`PickCommand`]s.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(&event) {
///     engine.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Mouse tracking and click/drag state machine.
    state: InputState,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a processor with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(
            &InputOptions::default(),
            KeybindingOptions::default(),
        )
    }

    /// Create a processor with the given gesture options and key bindings.
    #[must_use]
    pub fn with_options(
        input: &InputOptions,
        key_bindings: KeybindingOptions,
    ) -> Self {
        Self {
            state: InputState::new(input.drag_threshold),
            key_bindings,
        }
    }

    /// Apply new options; any press in progress is kept.
    pub fn apply_options(
        &mut self,
        input: &InputOptions,
        key_bindings: &KeybindingOptions,
    ) {
        self.state.set_drag_threshold(input.drag_threshold);
        self.key_bindings = key_bindings.clone();
    }

    /// Last cursor position in pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> Vec2 {
        self.state.mouse_pos
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<PickCommand> {
        self.key_bindings.lookup(key).map(KeyAction::to_command)
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<PickCommand> {
        match *event {
            InputEvent::CursorMoved { x, y } => {
                self.state.handle_mouse_position(x, y);
                Some(PickCommand::Hover {
                    position: self.state.mouse_pos,
                })
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::CursorLeft => {
                self.state.cancel();
                Some(PickCommand::ClearHover)
            }
            InputEvent::Key { ref code } => self.handle_key_press(code),
        }
    }

    /// Mouse button press/release; a click yields a selection on release.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<PickCommand> {
        if button != MouseButton::Left {
            return None;
        }
        if pressed {
            self.state.handle_mouse_down();
            return None;
        }
        match self.state.process_mouse_up() {
            ClickResult::NoAction => None,
            ClickResult::Click { position } => {
                Some(PickCommand::Select { position })
            }
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
