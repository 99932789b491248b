use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::generate_colour_field::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::data::colour_field::{CHANNELS, ColourField, ColourFieldData, ColourFieldError};
use crate::core::data::iteration_field::IterationField;
use std::error::Error;
use std::fmt;

/// Error type for colour field generation.
///
/// Cancellation is kept apart from real failures so callers can drop it
/// silently.
#[derive(Debug, PartialEq)]
pub enum GenerateColourFieldError {
    Cancelled(Cancelled),
    ColourMap(ColourMapError),
    ColourField(ColourFieldError),
}

impl fmt::Display for GenerateColourFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::ColourField(err) => write!(f, "colour field error: {}", err),
        }
    }
}

impl Error for GenerateColourFieldError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::ColourMap(err) => Some(err),
            Self::ColourField(err) => Some(err),
        }
    }
}

/// Colours every count of `field` with `mapper`.
pub fn generate_colour_field<CMap: ColourMap + ?Sized>(
    field: &IterationField,
    mapper: &CMap,
) -> Result<ColourField, GenerateColourFieldError> {
    generate_colour_field_cancelable(field, mapper, &NeverCancel)
}

/// Like [`generate_colour_field`], polling `cancel` every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels.
pub fn generate_colour_field_cancelable<CMap, C>(
    field: &IterationField,
    mapper: &CMap,
    cancel: &C,
) -> Result<ColourField, GenerateColourFieldError>
where
    CMap: ColourMap + ?Sized,
    C: CancelToken,
{
    let mut data: ColourFieldData = Vec::with_capacity(field.counts().len() * CHANNELS);

    for (i, &count) in field.counts().iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(GenerateColourFieldError::Cancelled(Cancelled));
        }

        let Colour { r, g, b } = mapper
            .map(count)
            .map_err(GenerateColourFieldError::ColourMap)?;

        data.extend_from_slice(&[r, g, b]);
    }

    ColourField::from_data(field.resolution(), data).map_err(GenerateColourFieldError::ColourField)
}
