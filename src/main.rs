//! Headless picking demo.
//!
//! Builds a small procedural room, places two copies of it side by side,
//! then replays a pointer sweep, a click and a pointer-leave through the
//! engine, logging every highlight change.
//!
//! ```text
//! RUST_LOG=debug bimpick [options.toml]
//! ```

use std::path::Path;
use std::sync::Arc;

use bimpick::camera::{Camera, Viewport};
use bimpick::engine::PickingEngine;
use bimpick::error::PickError;
use bimpick::highlight::SubsetOverlayLayer;
use bimpick::input::{InputEvent, MouseButton};
use bimpick::model::{ElementId, ModelBuilder, ModelGeometry};
use bimpick::options::Options;
use glam::{Mat4, Vec2, Vec3};

const WIDTH: f32 = 1280.0;
const HEIGHT: f32 = 720.0;
const SWEEP_STEPS: u32 = 64;

/// Floor slab, back wall with a door, and a column.
fn room(
    engine: &PickingEngine<SubsetOverlayLayer>,
) -> Result<Arc<ModelGeometry>, PickError> {
    let mut builder = ModelBuilder::new("room");
    let _ = builder
        .push_cuboid(
            ElementId(101),
            Vec3::new(-2.0, -1.6, -2.0),
            Vec3::new(2.0, -1.4, 1.0),
        )
        .push_cuboid(
            ElementId(201),
            Vec3::new(-2.0, -1.4, -2.0),
            Vec3::new(-0.5, 1.4, -1.8),
        )
        .push_cuboid(
            ElementId(202),
            Vec3::new(0.5, -1.4, -2.0),
            Vec3::new(2.0, 1.4, -1.8),
        )
        .push_cuboid(
            ElementId(301),
            Vec3::new(-0.5, -1.4, -1.95),
            Vec3::new(0.5, 0.8, -1.85),
        )
        .push_cuboid(
            ElementId(401),
            Vec3::new(1.2, -1.4, -0.2),
            Vec3::new(1.6, 1.4, 0.2),
        );
    engine.build_geometry(builder)
}

fn load_options() -> Options {
    let Some(path) = std::env::args().nth(1) else {
        return Options::default();
    };
    match Options::load(Path::new(&path)) {
        Ok(options) => {
            log::info!("Loaded options from {path}");
            options
        }
        Err(e) => {
            log::error!("Failed to load options from {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn log_frame(engine: &PickingEngine<SubsetOverlayLayer>, step: &str) {
    let frame = engine.frame();
    match frame.highlight.selection() {
        Some(selection) => log::info!(
            "{step}: highlighting {selection} ({} overlay live)",
            engine.renderer().len()
        ),
        None => log::info!("{step}: nothing highlighted"),
    }
}

fn main() {
    env_logger::init();

    let options = load_options();
    let mut engine = PickingEngine::new(
        SubsetOverlayLayer::new(),
        options,
        Viewport::from_size(WIDTH, HEIGHT),
    );

    let geometry = match room(&engine) {
        Ok(geometry) => geometry,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    let ids = engine.replace_models([
        (
            Arc::clone(&geometry),
            Mat4::from_translation(Vec3::new(-5.0, 0.0, 0.0)),
        ),
        (geometry, Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0))),
    ]);
    log::info!("Loaded {} room instances: {ids:?}", ids.len());

    // Pull back far enough to see both rooms.
    engine.set_camera(Camera {
        eye: Vec3::new(0.0, 1.0, 14.0),
        ..engine.camera().clone()
    });

    // Sweep left to right across the middle of the viewport.
    let mut last = engine.frame();
    for step in 0..=SWEEP_STEPS {
        let x = WIDTH * step as f32 / SWEEP_STEPS as f32;
        engine.enqueue(InputEvent::CursorMoved {
            x,
            y: HEIGHT * 0.55,
        });
        let _ = engine.process_events();
        let frame = engine.frame();
        if frame.highlight != last.highlight {
            log_frame(&engine, &format!("x = {x:.0}"));
        }
        last = frame;
    }

    // Click the right room's column.
    let ndc = engine
        .camera()
        .build_matrix()
        .project_point3(Vec3::new(6.4, 0.0, 0.2))
        .truncate();
    let column = engine.viewport().ndc_to_pixel(ndc);
    click(&mut engine, column);
    match engine.selection() {
        Some(selection) => log::info!("Clicked {selection}"),
        None => log::info!("Clicked empty space"),
    }

    engine.enqueue(InputEvent::CursorLeft);
    let _ = engine.process_events();
    log_frame(&engine, "pointer left");

    let stats = engine.renderer().stats();
    log::info!(
        "Overlay calls: {} created, {} destroyed, {} rejected",
        stats.created,
        stats.destroyed,
        stats.rejected
    );
}

fn click(engine: &mut PickingEngine<SubsetOverlayLayer>, at: Vec2) {
    engine.enqueue(InputEvent::CursorMoved { x: at.x, y: at.y });
    for pressed in [true, false] {
        engine.enqueue(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed,
        });
    }
    let _ = engine.process_events();
}
