use crate::core::data::image_point::ImagePoint;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "resolution must be at least 2x2 pixels: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ResolutionError {}

/// Image size in pixels.
///
/// Both axes are at least two pixels so the `n - 1` divisor of the
/// coordinate mapping is never zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Result<Self, ResolutionError> {
        if width < 2 || height < 2 {
            return Err(ResolutionError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether `point` lies on the image surface `[0, w-1] x [0, h-1]`.
    #[must_use]
    pub fn contains_point(&self, point: ImagePoint) -> bool {
        point.x.is_finite()
            && point.y.is_finite()
            && point.x >= 0.0
            && point.y >= 0.0
            && point.x <= f64::from(self.width - 1)
            && point.y <= f64::from(self.height - 1)
    }

    #[must_use]
    pub fn centre(&self) -> ImagePoint {
        ImagePoint::new(
            f64::from(self.width - 1) / 2.0,
            f64::from(self.height - 1) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let resolution = Resolution::new(400, 300).unwrap();

        assert_eq!(resolution.width(), 400);
        assert_eq!(resolution.height(), 300);
        assert_eq!(resolution.pixel_count(), 120_000);
    }

    #[test]
    fn test_must_be_at_least_two_pixels_wide_and_tall() {
        assert_eq!(
            Resolution::new(0, 0),
            Err(ResolutionError::InvalidSize {
                width: 0,
                height: 0
            })
        );
        assert_eq!(
            Resolution::new(1, 10),
            Err(ResolutionError::InvalidSize {
                width: 1,
                height: 10
            })
        );
        assert_eq!(
            Resolution::new(10, 1),
            Err(ResolutionError::InvalidSize {
                width: 10,
                height: 1
            })
        );
        assert!(Resolution::new(2, 2).is_ok());
    }

    #[test]
    fn test_contains_point() {
        let resolution = Resolution::new(100, 50).unwrap();

        assert!(resolution.contains_point(ImagePoint::new(0.0, 0.0)));
        assert!(resolution.contains_point(ImagePoint::new(99.0, 49.0)));
        assert!(resolution.contains_point(ImagePoint::new(42.5, 10.25)));
        assert!(!resolution.contains_point(ImagePoint::new(99.5, 10.0)));
        assert!(!resolution.contains_point(ImagePoint::new(-0.1, 10.0)));
        assert!(!resolution.contains_point(ImagePoint::new(10.0, 50.0)));
        assert!(!resolution.contains_point(ImagePoint::new(f64::NAN, 10.0)));
    }

    #[test]
    fn test_centre() {
        let resolution = Resolution::new(401, 301).unwrap();

        assert_eq!(resolution.centre(), ImagePoint::new(200.0, 150.0));
    }
}
