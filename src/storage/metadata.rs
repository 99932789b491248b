use serde::{Deserialize, Serialize};

use crate::core::data::resolution::{Resolution, ResolutionError};

/// Shape of a cached colour field. The data file carries no header, so this
/// record is the only description of its layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheMetadata {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
}

impl CacheMetadata {
    #[must_use]
    pub fn new(resolution: Resolution, max_iterations: u32) -> Self {
        Self {
            width: resolution.width(),
            height: resolution.height(),
            max_iterations,
        }
    }

    pub fn resolution(&self) -> Result<Resolution, ResolutionError> {
        Resolution::new(self.width, self.height)
    }

    /// Byte length of the data file this record describes.
    #[must_use]
    pub fn expected_bytes(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height) * 3 * std::mem::size_of::<f32>() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_field_names() {
        let metadata = CacheMetadata {
            width: 2400,
            height: 1600,
            max_iterations: 100,
        };

        let json = serde_json::to_string(&metadata).unwrap();

        assert_eq!(json, r#"{"width":2400,"height":1600,"max_iterations":100}"#);
        assert_eq!(serde_json::from_str::<CacheMetadata>(&json).unwrap(), metadata);
    }

    #[test]
    fn test_expected_bytes() {
        let metadata = CacheMetadata::new(Resolution::new(4, 3).unwrap(), 10);

        assert_eq!(metadata.expected_bytes(), 4 * 3 * 3 * 4);
    }

    #[test]
    fn test_degenerate_shape_has_no_resolution() {
        let metadata = CacheMetadata {
            width: 1,
            height: 3,
            max_iterations: 10,
        };

        assert!(metadata.resolution().is_err());
    }
}
