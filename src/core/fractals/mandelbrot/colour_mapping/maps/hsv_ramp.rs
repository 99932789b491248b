use crate::core::actions::generate_colour_field::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::{MandelbrotColourMap, ramp_position};

/// Reads the ramp channels `(t, 1, 1 - t)` as hue, saturation and value.
///
/// Low counts come out bright red, counts near the budget fade through the
/// spectrum towards black.
#[derive(Debug)]
pub struct MandelbrotHsvRamp {
    max_iterations: u32,
}

impl MandelbrotHsvRamp {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap for MandelbrotHsvRamp {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError> {
        if iterations > self.max_iterations {
            return Err(ColourMapError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            });
        }

        if iterations == self.max_iterations {
            return Ok(Colour::BLACK);
        }

        let t = ramp_position(iterations, self.max_iterations);

        Ok(Colour::from_hsv(t, 1.0, 1.0 - t))
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotHsvRamp {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::HsvRamp
    }
}
