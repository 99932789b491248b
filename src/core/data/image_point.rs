/// A position on the image surface, in pixels.
///
/// Coordinates are fractional: pointer events land between pixel centres and
/// orbit projections are not snapped to the grid.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ImagePoint {
    pub x: f64,
    pub y: f64,
}

impl ImagePoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
