//! Browser glue: DOM mouse events and element rectangles.

use glam::Vec2;

use super::{InputEvent, MouseButton};
use crate::camera::Viewport;

/// Install the panic hook and route `log` output to the browser console.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(level) {
        log::warn!("console logger already installed: {e}");
    }
}

/// Viewport covering `element`'s bounding client rectangle.
#[must_use]
pub fn viewport_of(element: &web_sys::Element) -> Viewport {
    let rect = element.get_bounding_client_rect();
    Viewport::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

/// Client-space pointer position of a mouse event.
#[must_use]
pub fn client_position(event: &web_sys::MouseEvent) -> Vec2 {
    Vec2::new(event.client_x() as f32, event.client_y() as f32)
}

/// `mousemove` → cursor moved, in client pixels (the same space as
/// [`viewport_of`]).
#[must_use]
pub fn cursor_moved(event: &web_sys::MouseEvent) -> InputEvent {
    let position = client_position(event);
    InputEvent::CursorMoved {
        x: position.x,
        y: position.y,
    }
}

/// `mousedown` / `mouseup` → button event, or `None` for buttons beyond
/// the three standard ones.
#[must_use]
pub fn mouse_button(
    event: &web_sys::MouseEvent,
    pressed: bool,
) -> Option<InputEvent> {
    let button = match event.button() {
        0 => MouseButton::Left,
        1 => MouseButton::Middle,
        2 => MouseButton::Right,
        _ => return None,
    };
    Some(InputEvent::MouseButton { button, pressed })
}
