use std::error::Error;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::core::data::colour_field::{CHANNELS, ColourField, ColourFieldError};
use crate::core::data::resolution::ResolutionError;
use crate::storage::metadata::CacheMetadata;

pub const IMAGE_FILE_NAME: &str = "fractal_image.dat";
pub const METADATA_FILE_NAME: &str = "metadata.json";

/// How a declared shape disagrees with what the cache holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeMismatch {
    /// `(width, height)` declared by the caller against the stored record.
    Dimensions {
        declared: (u32, u32),
        stored: (u32, u32),
    },
    ByteLength { expected: u64, actual: u64 },
}

impl fmt::Display for ShapeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dimensions { declared, stored } => write!(
                f,
                "declared shape {}x{} differs from stored shape {}x{}",
                declared.0, declared.1, stored.0, stored.1
            ),
            Self::ByteLength { expected, actual } => write!(
                f,
                "cached image holds {} bytes but its metadata describes {}",
                actual, expected
            ),
        }
    }
}

#[derive(Debug)]
pub enum ImageCacheError {
    Io(io::Error),
    Metadata(serde_json::Error),
    InvalidShape(ResolutionError),
    ShapeMismatch(ShapeMismatch),
    ColourField(ColourFieldError),
}

impl fmt::Display for ImageCacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "image cache I/O error: {}", err),
            Self::Metadata(err) => write!(f, "image cache metadata error: {}", err),
            Self::InvalidShape(err) => write!(f, "image cache metadata shape: {}", err),
            Self::ShapeMismatch(mismatch) => write!(f, "image cache shape mismatch: {}", mismatch),
            Self::ColourField(err) => write!(f, "cached image is unusable: {}", err),
        }
    }
}

impl Error for ImageCacheError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Metadata(err) => Some(err),
            Self::InvalidShape(err) => Some(err),
            Self::ColourField(err) => Some(err),
            Self::ShapeMismatch(_) => None,
        }
    }
}

impl From<io::Error> for ImageCacheError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ImageCacheError {
    fn from(err: serde_json::Error) -> Self {
        Self::Metadata(err)
    }
}

impl From<ResolutionError> for ImageCacheError {
    fn from(err: ResolutionError) -> Self {
        Self::InvalidShape(err)
    }
}

impl From<ColourFieldError> for ImageCacheError {
    fn from(err: ColourFieldError) -> Self {
        Self::ColourField(err)
    }
}

/// A directory holding one colour field as raw native-endian `f32`
/// (row-major, `height × width × 3`) next to a JSON metadata record.
///
/// Written once by a render, then read by any number of inspectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCache {
    dir: PathBuf,
}

impl ImageCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn image_path(&self) -> PathBuf {
        self.dir.join(IMAGE_FILE_NAME)
    }

    #[must_use]
    pub fn metadata_path(&self) -> PathBuf {
        self.dir.join(METADATA_FILE_NAME)
    }

    /// Writes `colours` and its metadata, replacing any previous contents.
    /// The returned metadata is the handle for [`ImageCache::load`].
    pub fn store(
        &self,
        colours: &ColourField,
        max_iterations: u32,
    ) -> Result<CacheMetadata, ImageCacheError> {
        fs::create_dir_all(&self.dir)?;

        let mut image = BufWriter::new(File::create(self.image_path())?);
        image.write_all(bytemuck::cast_slice(colours.data()))?;
        image.flush()?;

        let metadata = CacheMetadata::new(colours.resolution(), max_iterations);
        let mut record = BufWriter::new(File::create(self.metadata_path())?);
        serde_json::to_writer_pretty(&mut record, &metadata)?;
        record.flush()?;

        debug!(
            "Stored {}x{} colour field in {}",
            metadata.width,
            metadata.height,
            self.dir.display()
        );

        Ok(metadata)
    }

    pub fn read_metadata(&self) -> Result<CacheMetadata, ImageCacheError> {
        let reader = BufReader::new(File::open(self.metadata_path())?);

        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads the colour field described by `metadata`.
    ///
    /// The declared dimensions must equal the stored record's, and the data
    /// file's length must match them, before anything is read; on a mismatch
    /// no data is returned.
    pub fn load(&self, metadata: &CacheMetadata) -> Result<ColourField, ImageCacheError> {
        let resolution = metadata.resolution()?;

        let stored = self.read_metadata()?;
        if (stored.width, stored.height) != (metadata.width, metadata.height) {
            return Err(ImageCacheError::ShapeMismatch(ShapeMismatch::Dimensions {
                declared: (metadata.width, metadata.height),
                stored: (stored.width, stored.height),
            }));
        }

        let mut file = File::open(self.image_path())?;

        let actual = file.metadata()?.len();
        let expected = metadata.expected_bytes();
        if actual != expected {
            return Err(ImageCacheError::ShapeMismatch(ShapeMismatch::ByteLength {
                expected,
                actual,
            }));
        }

        let mut data = vec![0.0_f32; resolution.pixel_count() * CHANNELS];
        file.read_exact(bytemuck::cast_slice_mut(&mut data))?;

        Ok(ColourField::from_data(resolution, data)?)
    }

    /// [`ImageCache::read_metadata`] followed by [`ImageCache::load`].
    pub fn load_stored(&self) -> Result<(CacheMetadata, ColourField), ImageCacheError> {
        let metadata = self.read_metadata()?;
        let colours = self.load(&metadata)?;

        Ok((metadata, colours))
    }
}
