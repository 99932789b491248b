use crate::core::viewport::errors::ViewportError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportLimits {
    /// Each zoom-in divides the region extent by this, each zoom-out multiplies.
    pub zoom_factor: f64,
    pub iteration_growth: f64,
    pub min_iterations: u32,
    pub max_iterations_cap: u32,
    /// Zoom-outs that would exceed this extent on either axis are ignored.
    pub max_region_extent: f64,
}

impl ViewportLimits {
    pub fn validate(&self) -> Result<(), ViewportError> {
        if !self.zoom_factor.is_finite() || self.zoom_factor <= 1.0 {
            return Err(ViewportError::InvalidLimits {
                reason: "zoom factor must be finite and greater than 1",
            });
        }

        if !self.iteration_growth.is_finite() || self.iteration_growth < 1.0 {
            return Err(ViewportError::InvalidLimits {
                reason: "iteration growth must be finite and at least 1",
            });
        }

        if self.min_iterations < 2 {
            return Err(ViewportError::InvalidLimits {
                reason: "minimum iterations must be at least 2",
            });
        }

        if self.max_iterations_cap < self.min_iterations {
            return Err(ViewportError::InvalidLimits {
                reason: "iteration cap must not be below the minimum",
            });
        }

        if !self.max_region_extent.is_finite() || self.max_region_extent <= 0.0 {
            return Err(ViewportError::InvalidLimits {
                reason: "maximum region extent must be finite and positive",
            });
        }

        Ok(())
    }

    /// Scales `max_iterations` by the growth factor (zoom-in) or its inverse
    /// (zoom-out), rounds, then clamps to `[min_iterations, max_iterations_cap]`.
    #[must_use]
    pub fn adjust_iterations(&self, max_iterations: u32, zoom_in: bool) -> u32 {
        let current = f64::from(max_iterations);
        let scaled = if zoom_in {
            current * self.iteration_growth
        } else {
            current / self.iteration_growth
        };

        let clamped = scaled
            .round()
            .clamp(f64::from(self.min_iterations), f64::from(self.max_iterations_cap));

        clamped as u32
    }
}

impl Default for ViewportLimits {
    fn default() -> Self {
        Self {
            zoom_factor: 1.6,
            iteration_growth: 1.1,
            min_iterations: 10,
            max_iterations_cap: 2000,
            max_region_extent: 20.0,
        }
    }
}
