use crate::core::data::fractal_region::FractalRegionError;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportError {
    /// Zooming further would collapse the region below `f64` resolution.
    /// The last valid region is kept.
    PrecisionExhausted,
    InvalidLimits { reason: &'static str },
    InvalidRegion(FractalRegionError),
    InvalidIterations(MandelbrotError),
}

impl ViewportError {
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::PrecisionExhausted)
    }
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrecisionExhausted => {
                write!(f, "zoom precision exhausted: region is at floating-point resolution")
            }
            Self::InvalidLimits { reason } => write!(f, "invalid viewport limits: {}", reason),
            Self::InvalidRegion(err) => write!(f, "invalid viewport region: {}", err),
            Self::InvalidIterations(err) => write!(f, "invalid viewport iterations: {}", err),
        }
    }
}

impl Error for ViewportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRegion(err) => Some(err),
            Self::InvalidIterations(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FractalRegionError> for ViewportError {
    fn from(err: FractalRegionError) -> Self {
        Self::InvalidRegion(err)
    }
}

impl From<MandelbrotError> for ViewportError {
    fn from(err: MandelbrotError) -> Self {
        Self::InvalidIterations(err)
    }
}
