//! The picking engine: owns the loaded models, camera, viewport, highlight
//! controller and click selection, and runs one event turn at a time.
//!
//! Pointer events are queued with [`PickingEngine::enqueue`] and drained by
//! [`PickingEngine::process_events`]; once that returns, the highlight state
//! and the renderer's overlays agree, and [`PickingEngine::frame`] hands the
//! render loop a consistent snapshot.

mod command;
mod input;
mod options;
mod scene_management;

use std::collections::VecDeque;

pub use command::PickCommand;
use glam::Vec2;

use crate::camera::{Camera, Viewport};
use crate::highlight::{
    HighlightController, HighlightMaterial, HighlightState, OverlayHandle,
    OverlayRenderer,
};
use crate::input::{InputEvent, InputProcessor};
use crate::model::ModelSet;
use crate::options::Options;
use crate::picking::{RayCaster, Selection};

/// What the render loop needs to know after an event turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameView {
    /// Current hover highlight.
    pub highlight: HighlightState,
    /// Handle of the live overlay, present exactly when highlighting.
    pub overlay: Option<OverlayHandle>,
    /// Clicked selection.
    pub selection: Option<Selection>,
    /// Generation of the model set.
    pub model_generation: u64,
}

/// Pointer picking over a set of loaded models.
///
/// `R` is the host's overlay renderer.
#[derive(Debug)]
pub struct PickingEngine<R> {
    options: Options,
    active_preset: Option<String>,
    models: ModelSet,
    camera: Camera,
    viewport: Viewport,
    caster: RayCaster,
    highlight: HighlightController<R>,
    input: InputProcessor,
    queue: VecDeque<InputEvent>,
    selection: Option<Selection>,
    /// Last hover position, kept for re-picking after camera changes.
    last_pointer: Option<Vec2>,
}

impl<R: OverlayRenderer> PickingEngine<R> {
    /// Create an engine with no models, a camera built from `options`, and
    /// overlays drawn through `renderer`.
    #[must_use]
    pub fn new(renderer: R, options: Options, viewport: Viewport) -> Self {
        let camera = Camera::from_options(&options.camera, viewport.aspect());
        let highlight = HighlightController::new(
            renderer,
            HighlightMaterial::from_options(&options.highlight),
        );
        let input = InputProcessor::with_options(
            &options.input,
            options.keybindings.clone(),
        );
        Self {
            caster: RayCaster::new(&options.picking),
            options,
            active_preset: None,
            models: ModelSet::new(),
            camera,
            viewport,
            highlight,
            input,
            queue: VecDeque::new(),
            selection: None,
            last_pointer: None,
        }
    }

    /// Consistent snapshot for the render loop.
    #[must_use]
    pub fn frame(&self) -> FrameView {
        FrameView {
            highlight: self.highlight.state(),
            overlay: self.highlight.handle(),
            selection: self.selection,
            model_generation: self.models.generation(),
        }
    }

    /// Loaded models.
    #[must_use]
    pub fn models(&self) -> &ModelSet {
        &self.models
    }

    /// Current camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Replace the camera pose (e.g. from the host's orbit controls). The
    /// aspect ratio stays tied to the viewport.
    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = Camera {
            aspect: self.viewport.aspect(),
            ..camera
        };
    }

    /// Current viewport rectangle.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Update the viewport rectangle (resize, scroll) and the camera aspect.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.aspect = viewport.aspect();
    }

    /// Clicked selection.
    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Current hover highlight.
    #[must_use]
    pub fn highlight_state(&self) -> HighlightState {
        self.highlight.state()
    }

    /// The overlay renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        self.highlight.renderer()
    }

    /// Mutable access to the overlay renderer.
    pub fn renderer_mut(&mut self) -> &mut R {
        self.highlight.renderer_mut()
    }

    /// Ray caster configured from the current options.
    #[must_use]
    pub fn caster(&self) -> &RayCaster {
        &self.caster
    }

    /// Input processor state (cursor position, key bindings).
    #[must_use]
    pub fn input(&self) -> &InputProcessor {
        &self.input
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use glam::{Mat4, Vec3};

    use super::*;
    use crate::highlight::SubsetOverlayLayer;
    use crate::input::MouseButton;
    use crate::model::{ElementId, ModelBuilder, ModelGeometry, ModelId};

    const WIDTH: f32 = 800.0;
    const HEIGHT: f32 = 600.0;
    /// On the front face of element 1, away from its triangle diagonal.
    const ON_E1: Vec3 = Vec3::new(-1.6, 0.5, 0.5);
    /// On the front face of element 2, away from its triangle diagonal.
    const ON_E2: Vec3 = Vec3::new(1.0, -0.5, 0.5);
    const EMPTY: Vec2 = Vec2::new(5.0, 5.0);

    /// Two wall segments side by side with a gap at x = 0.
    fn wall() -> Arc<ModelGeometry> {
        let mut builder = ModelBuilder::new("wall");
        let _ = builder
            .push_cuboid(
                ElementId(1),
                Vec3::new(-2.0, -1.0, -0.5),
                Vec3::new(-0.2, 1.0, 0.5),
            )
            .push_cuboid(
                ElementId(2),
                Vec3::new(0.2, -1.0, -0.5),
                Vec3::new(2.0, 1.0, 0.5),
            );
        builder.build(4).unwrap()
    }

    fn engine() -> (PickingEngine<SubsetOverlayLayer>, ModelId) {
        let mut engine = PickingEngine::new(
            SubsetOverlayLayer::new(),
            Options::default(),
            Viewport::from_size(WIDTH, HEIGHT),
        );
        let id = engine.add_instance(wall(), Mat4::IDENTITY);
        (engine, id)
    }

    fn pixel<R: OverlayRenderer>(
        engine: &PickingEngine<R>,
        world: Vec3,
    ) -> Vec2 {
        let ndc = engine.camera().build_matrix().project_point3(world);
        engine.viewport().ndc_to_pixel(ndc.truncate())
    }

    fn moved(position: Vec2) -> InputEvent {
        InputEvent::CursorMoved {
            x: position.x,
            y: position.y,
        }
    }

    fn click<R: OverlayRenderer>(engine: &mut PickingEngine<R>, at: Vec2) {
        engine.handle_input(&moved(at));
        for pressed in [true, false] {
            engine.handle_input(&InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed,
            });
        }
    }

    fn highlighted(model: ModelId, element: u32) -> HighlightState {
        HighlightState::Highlighting(Selection::new(model, ElementId(element)))
    }

    #[test]
    fn stationary_pointer_creates_one_overlay() {
        let (mut engine, id) = engine();
        let at = pixel(&engine, ON_E1);
        for _ in 0..10 {
            engine.handle_input(&moved(at));
        }
        assert_eq!(engine.highlight_state(), highlighted(id, 1));
        assert_eq!(engine.renderer().stats().created, 1);
        assert_eq!(engine.renderer().len(), 1);
    }

    #[test]
    fn moving_to_empty_space_clears_highlight() {
        let (mut engine, id) = engine();
        engine.handle_input(&moved(pixel(&engine, ON_E1)));
        assert_eq!(engine.highlight_state(), highlighted(id, 1));

        engine.handle_input(&moved(EMPTY));
        assert!(engine.highlight_state().is_idle());
        assert_eq!(engine.renderer().stats().destroyed, 1);
        assert!(engine.renderer().is_empty());
    }

    #[test]
    fn crossing_elements_moves_the_overlay() {
        let (mut engine, id) = engine();
        engine.handle_input(&moved(pixel(&engine, ON_E1)));
        engine.handle_input(&moved(pixel(&engine, ON_E2)));

        let frame = engine.frame();
        assert_eq!(frame.highlight, highlighted(id, 2));
        let layer = engine.renderer();
        assert_eq!(layer.len(), 1);
        assert_eq!(layer.stats().created, 2);
        assert_eq!(layer.stats().destroyed, 1);
        let overlay = layer.get(frame.overlay.unwrap()).unwrap();
        assert_eq!(overlay.element_id, ElementId(2));
        assert_eq!(overlay.subset.triangle_count(), 12);
    }

    #[test]
    fn click_selects_and_background_click_clears() {
        let (mut engine, id) = engine();
        let on_e2 = pixel(&engine, ON_E2);
        click(&mut engine, on_e2);
        assert_eq!(
            engine.selection(),
            Some(Selection::new(id, ElementId(2)))
        );

        click(&mut engine, EMPTY);
        assert_eq!(engine.selection(), None);
    }

    #[test]
    fn drag_keeps_selection() {
        let (mut engine, id) = engine();
        let on_e1 = pixel(&engine, ON_E1);
        click(&mut engine, on_e1);

        engine.handle_input(&InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        engine.handle_input(&moved(EMPTY));
        engine.handle_input(&InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        });
        assert_eq!(
            engine.selection(),
            Some(Selection::new(id, ElementId(1)))
        );
    }

    #[test]
    fn cursor_leave_resets_highlight() {
        let (mut engine, _) = engine();
        engine.handle_input(&moved(pixel(&engine, ON_E1)));
        engine.handle_input(&InputEvent::CursorLeft);
        assert!(engine.highlight_state().is_idle());
        assert!(engine.renderer().is_empty());
        assert_eq!(
            engine.refresh_hover(),
            crate::highlight::Transition::Unchanged
        );
    }

    #[test]
    fn escape_clears_selection() {
        let (mut engine, _) = engine();
        let on_e1 = pixel(&engine, ON_E1);
        click(&mut engine, on_e1);
        assert!(engine.selection().is_some());
        engine.handle_input(&InputEvent::Key {
            code: "Escape".to_owned(),
        });
        assert_eq!(engine.selection(), None);
        // Hover highlight is independent of the click selection.
        assert!(!engine.highlight_state().is_idle());
    }

    #[test]
    fn queued_turn_leaves_frame_consistent() {
        let (mut engine, id) = engine();
        let on_e1 = pixel(&engine, ON_E1);
        let on_e2 = pixel(&engine, ON_E2);
        for position in [on_e1, EMPTY, on_e2, on_e2, on_e1] {
            engine.enqueue(moved(position));
        }
        assert_eq!(engine.pending_events(), 5);
        // Nothing happens until the turn runs.
        assert!(engine.frame().highlight.is_idle());

        assert_eq!(engine.process_events(), 5);
        assert_eq!(engine.pending_events(), 0);
        let frame = engine.frame();
        assert_eq!(frame.highlight, highlighted(id, 1));
        assert!(frame.overlay.is_some());
        assert_eq!(engine.renderer().len(), 1);
        let stats = engine.renderer().stats();
        assert_eq!(stats.created - stats.destroyed, 1);
    }

    #[test]
    fn overlay_failure_is_isolated_to_one_event() {
        let (mut engine, id) = engine();
        let on_e1 = pixel(&engine, ON_E1);
        engine.renderer_mut().set_rejecting(true);
        engine.handle_input(&moved(on_e1));
        assert!(engine.highlight_state().is_idle());
        assert_eq!(engine.frame().overlay, None);

        engine.renderer_mut().set_rejecting(false);
        engine.handle_input(&moved(on_e1));
        assert_eq!(engine.highlight_state(), highlighted(id, 1));
    }

    #[test]
    fn refused_destroy_is_cleaned_up_later() {
        let (mut engine, id) = engine();
        let on_e1 = pixel(&engine, ON_E1);
        let on_e2 = pixel(&engine, ON_E2);
        engine.handle_input(&moved(on_e1));
        engine.renderer_mut().set_rejecting(true);
        engine.handle_input(&moved(on_e2));
        assert!(engine.highlight_state().is_idle());
        assert_eq!(engine.renderer().len(), 1);

        engine.renderer_mut().set_rejecting(false);
        engine.handle_input(&moved(on_e2));
        assert_eq!(engine.highlight_state(), highlighted(id, 2));
        assert_eq!(engine.renderer().len(), 1);

        engine.handle_input(&moved(EMPTY));
        assert!(engine.renderer().is_empty());
        let stats = engine.renderer().stats();
        assert_eq!(stats.created, stats.destroyed);
    }

    #[test]
    fn replacing_models_resets_highlight_and_selection() {
        let (mut engine, _) = engine();
        let on_e1 = pixel(&engine, ON_E1);
        click(&mut engine, on_e1);
        let generation = engine.frame().model_generation;

        let ids = engine.replace_models([(wall(), Mat4::IDENTITY)]);
        let frame = engine.frame();
        assert!(frame.highlight.is_idle());
        assert_eq!(frame.selection, None);
        assert!(frame.model_generation > generation);
        assert!(engine.renderer().is_empty());

        engine.handle_input(&moved(on_e1));
        assert_eq!(engine.highlight_state(), highlighted(ids[0], 1));
    }

    #[test]
    fn side_by_side_instances_are_distinct_models() {
        let (mut engine, _) = engine();
        let geometry = wall();
        let ids = engine.replace_models([
            (
                Arc::clone(&geometry),
                Mat4::from_translation(Vec3::new(-5.0, 0.0, 0.0)),
            ),
            (geometry, Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0))),
        ]);
        engine.set_camera(Camera {
            eye: Vec3::new(0.0, 0.0, 15.0),
            ..engine.camera().clone()
        });

        engine.handle_input(&moved(pixel(&engine, ON_E1 + Vec3::X * -5.0)));
        assert_eq!(engine.highlight_state(), highlighted(ids[0], 1));
        engine.handle_input(&moved(pixel(&engine, ON_E1 + Vec3::X * 5.0)));
        assert_eq!(engine.highlight_state(), highlighted(ids[1], 1));
        assert_eq!(engine.renderer().len(), 1);
    }

    #[test]
    fn camera_move_repicks_last_pointer() {
        let (mut engine, _) = engine();
        engine.handle_input(&moved(pixel(&engine, ON_E1)));
        engine.set_camera(Camera {
            eye: Vec3::new(0.0, 0.0, -5.0),
            target: Vec3::new(0.0, 0.0, -10.0),
            ..engine.camera().clone()
        });
        assert_eq!(
            engine.refresh_hover(),
            crate::highlight::Transition::Cleared
        );
    }

    #[test]
    fn options_reach_subsystems() {
        let (mut engine, _) = engine();
        let on_e1 = pixel(&engine, ON_E1);
        let mut options = Options::default();
        options.highlight.color = [0.0, 1.0, 0.0];
        engine.set_options(options.clone());
        engine.handle_input(&moved(on_e1));
        let overlay = engine.frame().overlay.unwrap();
        assert_eq!(
            engine.renderer().get(overlay).unwrap().material.color,
            [0.0, 1.0, 0.0]
        );

        options.picking.max_distance = 1.0;
        engine.set_options(options);
        engine.handle_input(&moved(on_e1));
        assert!(engine.highlight_state().is_idle());
    }

    #[test]
    fn presets_round_trip() {
        let dir = std::env::temp_dir()
            .join(format!("bimpick-engine-presets-{}", std::process::id()));
        let (mut engine, _) = engine();
        let mut options = Options::default();
        options.input.drag_threshold = 9.0;
        engine.set_options(options);
        assert!(engine.save_preset("wide", &dir));

        engine.set_options(Options::default());
        assert!(engine.load_preset("wide", &dir));
        assert_eq!(engine.options().input.drag_threshold, 9.0);
        assert_eq!(engine.active_preset(), Some("wide"));
        assert!(!engine.load_preset("missing", &dir));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
