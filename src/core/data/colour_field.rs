use crate::core::data::colour::Colour;
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

pub const CHANNELS: usize = 3;

fn resolution_to_field_len(resolution: Resolution) -> usize {
    resolution.pixel_count() * CHANNELS
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColourFieldError {
    BoundsMismatch {
        resolution_size: usize,
        data_size: usize,
    },
}

impl fmt::Display for ColourFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                resolution_size,
                data_size,
            } => {
                write!(
                    f,
                    "resolution needs {} channel values but data holds {}",
                    resolution_size, data_size
                )
            }
        }
    }
}

impl Error for ColourFieldError {}

pub type ColourFieldData = Vec<f32>;

/// Dense `(height, width, 3)` array of `f32` channels in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct ColourField {
    resolution: Resolution,
    data: ColourFieldData,
}

impl ColourField {
    pub fn from_data(
        resolution: Resolution,
        data: ColourFieldData,
    ) -> Result<Self, ColourFieldError> {
        let resolution_size = resolution_to_field_len(resolution);

        if resolution_size != data.len() {
            return Err(ColourFieldError::BoundsMismatch {
                resolution_size,
                data_size: data.len(),
            });
        }

        Ok(Self { resolution, data })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// The `(height, width, channels)` shape of the underlying array.
    #[must_use]
    pub fn shape(&self) -> (usize, usize, usize) {
        (
            self.resolution.height() as usize,
            self.resolution.width() as usize,
            CHANNELS,
        )
    }

    #[must_use]
    pub fn pixel(&self, col: u32, row: u32) -> Option<Colour> {
        if col >= self.resolution.width() || row >= self.resolution.height() {
            return None;
        }

        let index = (row as usize * self.resolution.width() as usize + col as usize) * CHANNELS;

        Some(Colour::new(
            self.data[index],
            self.data[index + 1],
            self.data[index + 2],
        ))
    }

    /// Quantises every channel to a byte, in the same row-major order.
    #[must_use]
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.data
            .chunks_exact(CHANNELS)
            .flat_map(|px| Colour::new(px[0], px[1], px[2]).to_rgb8())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolution(width: u32, height: u32) -> Resolution {
        Resolution::new(width, height).unwrap()
    }

    #[test]
    fn test_from_data_valid() {
        let data: Vec<f32> = vec![
            1.0, 0.0, 0.0, // (0,0)
            0.0, 1.0, 0.0, // (1,0)
            0.0, 0.0, 1.0, // (0,1)
            1.0, 1.0, 0.0, // (1,1)
        ];
        let field = ColourField::from_data(resolution(2, 2), data.clone()).unwrap();

        assert_eq!(field.data(), &data[..]);
        assert_eq!(field.shape(), (2, 2, 3));
        assert_eq!(field.pixel(0, 1), Some(Colour::new(0.0, 0.0, 1.0)));
        assert_eq!(field.pixel(1, 1), Some(Colour::new(1.0, 1.0, 0.0)));
        assert_eq!(field.pixel(2, 0), None);
    }

    #[test]
    fn test_from_data_too_small() {
        let result = ColourField::from_data(resolution(2, 2), vec![1.0, 0.0, 0.0]);

        assert_eq!(
            result.unwrap_err(),
            ColourFieldError::BoundsMismatch {
                resolution_size: 12,
                data_size: 3
            }
        );
    }

    #[test]
    fn test_from_data_too_large() {
        let result = ColourField::from_data(resolution(2, 2), vec![0.0; 24]);

        assert_eq!(
            result.unwrap_err(),
            ColourFieldError::BoundsMismatch {
                resolution_size: 12,
                data_size: 24
            }
        );
    }

    #[test]
    fn test_shape_is_height_first() {
        let field = ColourField::from_data(resolution(5, 7), vec![0.0; 105]).unwrap();

        assert_eq!(field.shape(), (7, 5, 3));
    }

    #[test]
    fn test_to_rgb8() {
        let data = vec![1.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.2, 0.4, 0.6, 1.0, 1.0, 1.0];
        let field = ColourField::from_data(resolution(2, 2), data).unwrap();

        assert_eq!(
            field.to_rgb8(),
            vec![255, 128, 0, 0, 0, 0, 51, 102, 153, 255, 255, 255]
        );
    }
}
