/// A window scroll offset in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollPosition {
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset.
    pub y: f64,
}

impl ScrollPosition {
    /// The top left corner of the page.
    pub const TOP: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new [`ScrollPosition`].
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
