use glam::Vec2;

/// Bounding rectangle of the drawing surface, in the same pixel space the
/// pointer positions are reported in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Rectangle at (`left`, `top`) of the given size.
    #[must_use]
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Rectangle anchored at the origin, e.g. a window's inner size.
    #[must_use]
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Width / height, or 1.0 for a degenerate rectangle.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.is_degenerate() {
            1.0
        } else {
            self.width / self.height
        }
    }

    /// Whether the rectangle has no area to normalize against.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Convert a pixel position to normalized device coordinates.
    ///
    /// The rectangle maps to [-1, 1] on both axes. Screen Y grows downward
    /// and device Y grows upward, so the vertical axis is flipped. Points
    /// outside the rectangle map outside that range. Returns `None` for a
    /// degenerate rectangle.
    #[must_use]
    pub fn pixel_to_ndc(&self, pixel: Vec2) -> Option<Vec2> {
        if self.is_degenerate() {
            return None;
        }
        Some(Vec2::new(
            (pixel.x - self.left) / self.width * 2.0 - 1.0,
            -((pixel.y - self.top) / self.height) * 2.0 + 1.0,
        ))
    }

    /// Pixel position of a point in normalized device coordinates; the
    /// inverse of [`pixel_to_ndc`](Self::pixel_to_ndc).
    #[must_use]
    pub fn ndc_to_pixel(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            self.left + (ndc.x + 1.0) / 2.0 * self.width,
            self.top + (1.0 - ndc.y) / 2.0 * self.height,
        )
    }

    /// Pixel position of the rectangle's center.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.left + self.width / 2.0,
            self.top + self.height / 2.0,
        )
    }
}
