use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::colour_field::ColourField;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes colour fields as binary PPM images.
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, colours: &ColourField, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(parent) = filepath.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = BufWriter::new(std::fs::File::create(filepath)?);
        let resolution = colours.resolution();

        // P6 is binary RGB, followed by width, height and max channel value
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", resolution.width(), resolution.height())?;
        writeln!(file, "255")?;
        file.write_all(&colours.to_rgb8())?;
        file.flush()?;

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::resolution::Resolution;

    #[test]
    fn test_writes_header_and_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("frame.ppm");
        let colours = ColourField::from_data(
            Resolution::new(2, 2).unwrap(),
            vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.5, 0.5, 0.5],
        )
        .unwrap();

        PpmFilePresenter::new().present(&colours, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let header = b"P6\n2 2\n255\n";
        assert_eq!(&bytes[..header.len()], header);
        assert_eq!(
            &bytes[header.len()..],
            &[255, 0, 0, 0, 255, 0, 0, 0, 255, 128, 128, 128]
        );
    }
}
