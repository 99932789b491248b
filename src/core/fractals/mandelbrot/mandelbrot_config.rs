use crate::core::data::complex::Complex;
use crate::core::data::fractal_region::FractalRegion;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::errors::{MandelbrotError, validate_max_iterations};

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Real axis `[-2.2, 1.2]`, imaginary axis `[-1.2, 1.2]`.
pub const DEFAULT_REGION: FractalRegion =
    FractalRegion::new_unchecked(Complex::new(-2.2, -1.2), Complex::new(1.2, 1.2));

/// Starting view for a render or an exploration session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub region: FractalRegion,
    pub max_iterations: u32,
    pub colour_map_kind: MandelbrotColourMapKinds,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            colour_map_kind: MandelbrotColourMapKinds::default(),
        }
    }
}

impl MandelbrotConfig {
    #[must_use]
    pub fn with_max_iterations(self, max_iterations: u32) -> Self {
        Self {
            max_iterations,
            ..self
        }
    }

    #[must_use]
    pub fn with_colour_map(self, colour_map_kind: MandelbrotColourMapKinds) -> Self {
        Self {
            colour_map_kind,
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), MandelbrotError> {
        validate_max_iterations(self.max_iterations).map(|_| ())
    }
}
