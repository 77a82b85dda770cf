use glam::Vec2;

/// Result of processing a mouse-up event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ClickResult {
    /// No selection action (drag, release without press, etc.)
    NoAction,
    /// Press and release without dragging, at `position`.
    Click { position: Vec2 },
}

/// Tracks mouse position and tells clicks apart from camera drags.
#[derive(Debug, Clone)]
pub(crate) struct InputState {
    pub mouse_pos: Vec2,
    press_pos: Option<Vec2>,
    is_dragging: bool,
    drag_threshold: f32,
}

impl InputState {
    /// Create a new input state with no active press.
    pub fn new(drag_threshold: f32) -> Self {
        Self {
            mouse_pos: Vec2::ZERO,
            press_pos: None,
            is_dragging: false,
            drag_threshold: drag_threshold.max(0.0),
        }
    }

    pub fn set_drag_threshold(&mut self, drag_threshold: f32) {
        self.drag_threshold = drag_threshold.max(0.0);
    }

    /// Record the press position.
    pub fn handle_mouse_down(&mut self) {
        self.press_pos = Some(self.mouse_pos);
        self.is_dragging = false;
    }

    /// Update cursor position; travel beyond the threshold while pressed
    /// turns the gesture into a drag.
    pub fn handle_mouse_position(&mut self, x: f32, y: f32) {
        self.mouse_pos = Vec2::new(x, y);
        if let Some(press) = self.press_pos {
            if press.distance(self.mouse_pos) > self.drag_threshold {
                self.is_dragging = true;
            }
        }
    }

    /// Forget any press in progress (cursor left the viewport).
    pub fn cancel(&mut self) {
        self.press_pos = None;
        self.is_dragging = false;
    }

    /// Process a mouse-up event and return what kind of click happened.
    pub fn process_mouse_up(&mut self) -> ClickResult {
        let press = self.press_pos.take();
        let was_dragging = self.is_dragging;
        self.is_dragging = false;

        match press {
            Some(_) if !was_dragging => ClickResult::Click {
                position: self.mouse_pos,
            },
            _ => ClickResult::NoAction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn still_press_is_a_click() {
        let mut state = InputState::new(4.0);
        state.handle_mouse_position(10.0, 10.0);
        state.handle_mouse_down();
        state.handle_mouse_position(12.0, 11.0);
        assert_eq!(
            state.process_mouse_up(),
            ClickResult::Click {
                position: Vec2::new(12.0, 11.0)
            }
        );
    }

    #[test]
    fn drag_is_not_a_click() {
        let mut state = InputState::new(4.0);
        state.handle_mouse_down();
        state.handle_mouse_position(30.0, 0.0);
        // Returning to the press point does not undo the drag.
        state.handle_mouse_position(0.0, 0.0);
        assert_eq!(state.process_mouse_up(), ClickResult::NoAction);
    }

    #[test]
    fn release_without_press_does_nothing() {
        let mut state = InputState::new(4.0);
        assert_eq!(state.process_mouse_up(), ClickResult::NoAction);
        state.handle_mouse_down();
        state.cancel();
        assert_eq!(state.process_mouse_up(), ClickResult::NoAction);
    }
}
