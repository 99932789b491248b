use crate::core::actions::render::render::RenderRequest;
use crate::core::data::complex::Complex;
use crate::core::data::fractal_region::{FractalRegion, FractalRegionError};
use crate::core::data::image_frame::ImageFrame;
use crate::core::data::image_point::ImagePoint;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Zooming,
    Dragging,
}

/// Read-only copy of what one frame shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSnapshot {
    pub region: FractalRegion,
    pub frame: ImageFrame,
    pub max_iterations: u32,
}

impl ViewportSnapshot {
    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.frame.resolution()
    }

    #[must_use]
    pub fn render_request(&self, colour_map_kind: MandelbrotColourMapKinds) -> RenderRequest {
        RenderRequest::new(self.region, self.frame, self.max_iterations)
            .with_colour_map(colour_map_kind)
    }
}

/// The viewport's region, iteration budget and frame.
///
/// The visible region is the `anchor` (the region after the last zoom or
/// reset) shifted by the net pan in pixels, measured with the anchor's own
/// steps. Pixel deltas are whole numbers, so panning back to the start
/// restores the anchor bit for bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    anchor: FractalRegion,
    anchor_frame: ImageFrame,
    pan: ImagePoint,
    region: FractalRegion,
    frame: ImageFrame,
    max_iterations: u32,
}

impl ViewportState {
    #[must_use]
    pub fn new(region: FractalRegion, resolution: Resolution, max_iterations: u32) -> Self {
        let frame = ImageFrame::new(resolution, &region);

        Self {
            anchor: region,
            anchor_frame: frame,
            pan: ImagePoint::default(),
            region,
            frame,
            max_iterations,
        }
    }

    #[must_use]
    pub fn region(&self) -> FractalRegion {
        self.region
    }

    #[must_use]
    pub fn frame(&self) -> ImageFrame {
        self.frame
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.frame.resolution()
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn pan(&self) -> ImagePoint {
        self.pan
    }

    #[must_use]
    pub fn snapshot(&self) -> ViewportSnapshot {
        ViewportSnapshot {
            region: self.region,
            frame: self.frame,
            max_iterations: self.max_iterations,
        }
    }

    /// State after panning by a further `(dx, dy)` pixels. Moving the cursor
    /// right or down moves the window left or up.
    pub fn panned_by(&self, dx: f64, dy: f64) -> Result<Self, FractalRegionError> {
        let pan = ImagePoint::new(self.pan.x + dx, self.pan.y + dy);
        let offset = Complex::new(
            pan.x * self.anchor_frame.x_step(),
            -pan.y * self.anchor_frame.y_step(),
        );
        let region = self.anchor.translated_by(offset)?;

        Ok(Self {
            pan,
            region,
            frame: ImageFrame::new(self.resolution(), &region),
            ..*self
        })
    }

    /// State showing `region` as a fresh anchor with no pan.
    #[must_use]
    pub fn reanchored(&self, region: FractalRegion, max_iterations: u32) -> Self {
        Self::new(region, self.resolution(), max_iterations)
    }
}
