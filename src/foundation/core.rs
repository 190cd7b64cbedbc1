use std::fmt;

/// Upper bound, in output pixels, for the larger side of a rendered image.
pub const MAX_OUTPUT_DIM: u32 = 2000;

/// Straight 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Background color of every canvas.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Build a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels in `[r, g, b]` order, as laid out in a packed RGB8 buffer.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// Logical pixel coordinate. Ordered row-major (`y` first) so maps keyed by `Coord` iterate
/// top-to-bottom, left-to-right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Column, 0-based.
    pub x: u32,
    /// Row, 0-based.
    pub y: u32,
}

impl Coord {
    /// Build a coordinate.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Size of a pixel map in logical pixels (`max coordinate + 1` on each axis).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct LogicalSize {
    /// Logical width.
    pub width: u32,
    /// Logical height.
    pub height: u32,
}

impl LogicalSize {
    /// Largest integer factor that keeps both scaled sides within `max_dim`.
    ///
    /// Returns `0` when either side already exceeds `max_dim` (or is zero); callers treat
    /// that as a degenerate scale.
    pub fn scale_factor(self, max_dim: u32) -> u32 {
        if self.width == 0 || self.height == 0 {
            return 0;
        }
        (max_dim / self.width).min(max_dim / self.height)
    }

    /// Size after uniform integer magnification.
    pub fn scaled(self, factor: u32) -> (u32, u32) {
        (
            self.width.saturating_mul(factor),
            self.height.saturating_mul(factor),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
