use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationFieldError {
    BoundsMismatch { expected: usize, actual: usize },
    CountExceedsMax { count: u32, max_iterations: u32 },
}

impl fmt::Display for IterationFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch { expected, actual } => {
                write!(
                    f,
                    "iteration field expects {} counts, got {}",
                    expected, actual
                )
            }
            Self::CountExceedsMax {
                count,
                max_iterations,
            } => {
                write!(
                    f,
                    "iteration count {} exceeds maximum {}",
                    count, max_iterations
                )
            }
        }
    }
}

impl Error for IterationFieldError {}

/// Row-major escape counts for one render.
///
/// A count equal to `max_iterations` marks a pixel that never escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationField {
    resolution: Resolution,
    max_iterations: u32,
    counts: Vec<u32>,
}

impl IterationField {
    pub fn from_counts(
        resolution: Resolution,
        max_iterations: u32,
        counts: Vec<u32>,
    ) -> Result<Self, IterationFieldError> {
        if counts.len() != resolution.pixel_count() {
            return Err(IterationFieldError::BoundsMismatch {
                expected: resolution.pixel_count(),
                actual: counts.len(),
            });
        }

        if let Some(&count) = counts.iter().find(|&&count| count > max_iterations) {
            return Err(IterationFieldError::CountExceedsMax {
                count,
                max_iterations,
            });
        }

        Ok(Self {
            resolution,
            max_iterations,
            counts,
        })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    #[must_use]
    pub fn get(&self, col: u32, row: u32) -> Option<u32> {
        if col >= self.resolution.width() || row >= self.resolution.height() {
            return None;
        }

        Some(self.counts[row as usize * self.resolution.width() as usize + col as usize])
    }

    #[must_use]
    pub fn interior_count(&self) -> usize {
        self.counts
            .iter()
            .filter(|&&count| count == self.max_iterations)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_counts_valid() {
        let resolution = Resolution::new(3, 2).unwrap();
        let field = IterationField::from_counts(resolution, 5, vec![0, 1, 2, 3, 4, 5]).unwrap();

        assert_eq!(field.get(0, 0), Some(0));
        assert_eq!(field.get(2, 0), Some(2));
        assert_eq!(field.get(0, 1), Some(3));
        assert_eq!(field.get(2, 1), Some(5));
        assert_eq!(field.get(3, 0), None);
        assert_eq!(field.get(0, 2), None);
        assert_eq!(field.interior_count(), 1);
    }

    #[test]
    fn test_from_counts_wrong_length() {
        let resolution = Resolution::new(2, 2).unwrap();

        assert_eq!(
            IterationField::from_counts(resolution, 5, vec![0; 3]),
            Err(IterationFieldError::BoundsMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_from_counts_rejects_count_above_max() {
        let resolution = Resolution::new(2, 2).unwrap();

        assert_eq!(
            IterationField::from_counts(resolution, 5, vec![0, 6, 1, 1]),
            Err(IterationFieldError::CountExceedsMax {
                count: 6,
                max_iterations: 5
            })
        );
    }
}
