//! Input handling: event types, click/drag detection, and the input
//! processor that converts raw window events into picking commands.

/// Platform-agnostic input events.
pub mod event;
/// Click/drag state machine and mouse position tracking.
pub(crate) mod mouse;
/// Converts raw events into picking commands.
pub mod processor;
/// DOM event and element conversions.
#[cfg(feature = "web")]
pub mod web;

pub use event::{InputEvent, MouseButton};
pub use processor::{InputProcessor, KeyAction};
