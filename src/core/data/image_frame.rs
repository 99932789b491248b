use crate::core::data::fractal_region::FractalRegion;
use crate::core::data::resolution::Resolution;

/// Resolution plus the per-pixel step it implies for a given region.
///
/// There is no way to build a frame without a region, so the steps always
/// describe the region they were derived from.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ImageFrame {
    resolution: Resolution,
    x_step: f64,
    y_step: f64,
}

impl ImageFrame {
    #[must_use]
    pub fn new(resolution: Resolution, region: &FractalRegion) -> Self {
        Self {
            resolution,
            x_step: region.width() / f64::from(resolution.width()),
            y_step: region.height() / f64::from(resolution.height()),
        }
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.resolution.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.resolution.height()
    }

    #[must_use]
    pub fn x_step(&self) -> f64 {
        self.x_step
    }

    #[must_use]
    pub fn y_step(&self) -> f64 {
        self.y_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_follow_region_and_resolution() {
        let region = FractalRegion::from_bounds(-2.0, -1.5, 1.0, 1.5).unwrap();
        let frame = ImageFrame::new(Resolution::new(400, 300).unwrap(), &region);

        assert_eq!(frame.width(), 400);
        assert_eq!(frame.height(), 300);
        assert_eq!(frame.x_step(), 3.0 / 400.0);
        assert_eq!(frame.y_step(), 3.0 / 300.0);
    }

    #[test]
    fn test_rebuilding_for_new_region_updates_steps() {
        let resolution = Resolution::new(100, 100).unwrap();
        let wide = FractalRegion::from_bounds(-2.0, -2.0, 2.0, 2.0).unwrap();
        let narrow = FractalRegion::from_bounds(-1.0, -1.0, 1.0, 1.0).unwrap();

        let before = ImageFrame::new(resolution, &wide);
        let after = ImageFrame::new(resolution, &narrow);

        assert_eq!(after.x_step(), before.x_step() / 2.0);
        assert_eq!(after.y_step(), before.y_step() / 2.0);
    }
}
