use std::{error::Error, fmt};

/// The escape loop needs at least two iterations: the colour ramp divides
/// by `max_iterations - 1`.
pub const MIN_MAX_ITERATIONS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MandelbrotError {
    InvalidMaxIterations { max_iterations: u32 },
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMaxIterations { max_iterations } => {
                write!(
                    f,
                    "maximum iterations must be at least {}, got {}",
                    MIN_MAX_ITERATIONS, max_iterations
                )
            }
        }
    }
}

impl Error for MandelbrotError {}

pub fn validate_max_iterations(max_iterations: u32) -> Result<u32, MandelbrotError> {
    if max_iterations < MIN_MAX_ITERATIONS {
        return Err(MandelbrotError::InvalidMaxIterations { max_iterations });
    }

    Ok(max_iterations)
}
