use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FractalRegionError {
    InvalidSize { width: f64, height: f64 },
    NonFinite,
}

impl fmt::Display for FractalRegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "fractal region size must be positive: {}x{}",
                    width, height
                )
            }
            Self::NonFinite => write!(f, "fractal region corners must be finite"),
        }
    }
}

impl Error for FractalRegionError {}

/// Axis-aligned rectangle of the complex plane.
///
/// `min` holds `(x0, y0)` and `max` holds `(x1, y1)`; construction guarantees
/// `x1 > x0` and `y1 > y0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FractalRegion {
    min: Complex,
    max: Complex,
}

impl FractalRegion {
    pub fn new(min: Complex, max: Complex) -> Result<Self, FractalRegionError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(FractalRegionError::NonFinite);
        }

        let width = max.real - min.real;
        let height = max.imag - min.imag;

        if width <= 0.0 || height <= 0.0 {
            return Err(FractalRegionError::InvalidSize { width, height });
        }

        Ok(Self { min, max })
    }

    /// For literal bounds already known to be finite and ordered.
    pub(crate) const fn new_unchecked(min: Complex, max: Complex) -> Self {
        Self { min, max }
    }

    pub fn from_bounds(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<Self, FractalRegionError> {
        Self::new(Complex::new(x0, y0), Complex::new(x1, y1))
    }

    #[must_use]
    pub fn min(&self) -> Complex {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Complex {
        self.max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.real - self.min.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.imag - self.min.imag
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.min.real <= point.real
            && self.min.imag <= point.imag
            && self.max.real >= point.real
            && self.max.imag >= point.imag
    }

    /// Moves every corner by `-offset`.
    pub fn translated_by(&self, offset: Complex) -> Result<Self, FractalRegionError> {
        Self::new(self.min - offset, self.max - offset)
    }

    /// Moves each corner to `focal + (corner - focal) * scale`.
    ///
    /// A scale below one shrinks the region towards `focal`, above one grows it.
    pub fn scaled_about(&self, focal: Complex, scale: f64) -> Result<Self, FractalRegionError> {
        Self::new(
            focal + (self.min - focal).scale(scale),
            focal + (self.max - focal).scale(scale),
        )
    }
}
