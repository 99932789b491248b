use std::path::Path;

use crate::core::data::colour_field::ColourField;

pub trait FilePresenterPort {
    fn present(&self, colours: &ColourField, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
