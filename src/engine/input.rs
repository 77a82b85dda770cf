//! Input & selection methods for PickingEngine

use glam::Vec2;

use super::{PickCommand, PickingEngine};
use crate::highlight::{OverlayRenderer, Transition};
use crate::input::InputEvent;
use crate::picking::resolve;

impl<R: OverlayRenderer> PickingEngine<R> {
    /// Process a platform-agnostic input event immediately.
    ///
    /// # Example
    ///
    /// ```ignore
    /// engine.handle_input(&InputEvent::CursorMoved { x, y });
    /// ```
    pub fn handle_input(&mut self, event: &InputEvent) {
        if let Some(cmd) = self.input.handle_event(event) {
            self.execute(cmd);
        }
    }

    /// Queue an event for the next [`process_events`](Self::process_events).
    pub fn enqueue(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    /// Drain queued events in arrival order. Returns how many were handled.
    pub fn process_events(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.queue.pop_front() {
            self.handle_input(&event);
            handled += 1;
        }
        handled
    }

    /// Number of events waiting.
    #[must_use]
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Apply one command.
    pub fn execute(&mut self, cmd: PickCommand) {
        match cmd {
            PickCommand::Hover { position } => {
                let _ = self.hover(position);
            }
            PickCommand::ClearHover => {
                self.last_pointer = None;
                let _ = self.highlight.reset();
            }
            PickCommand::Select { position } => self.select(position),
            PickCommand::ClearSelection => self.clear_selection(),
        }
    }

    /// Highlight whatever is under `position`.
    pub fn hover(&mut self, position: Vec2) -> Transition {
        self.last_pointer = Some(position);
        let selection = self.caster.pick(
            position,
            &self.viewport,
            &self.camera,
            &self.models,
        );
        self.highlight.update(selection, &self.models)
    }

    /// Re-pick at the last hover position, e.g. after the camera moved.
    pub fn refresh_hover(&mut self) -> Transition {
        match self.last_pointer {
            Some(position) => self.hover(position),
            None => Transition::Unchanged,
        }
    }

    /// Select the element under `position`, or clear the selection when
    /// nothing is there.
    pub fn select(&mut self, position: Vec2) {
        let hit = self.caster.cast(
            position,
            &self.viewport,
            &self.camera,
            self.models.models(),
        );
        match hit {
            Some(hit) => {
                let selection = resolve(&hit, &self.models);
                log::info!(
                    "selected {selection} (face {}, distance {:.3})",
                    hit.face_index,
                    hit.distance
                );
                self.selection = Some(selection);
            }
            None => self.clear_selection(),
        }
    }

    /// Forget the clicked selection.
    pub fn clear_selection(&mut self) {
        if let Some(previous) = self.selection.take() {
            log::info!("cleared selection of {previous}");
        }
    }
}
