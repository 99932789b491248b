use crate::core::actions::generate_colour_field::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::{MandelbrotColourMap, ramp_position};

/// Uses the ramp channels `(t, 1, 1 - t)` directly as red, green and blue.
#[derive(Debug)]
pub struct MandelbrotRgbRamp {
    max_iterations: u32,
}

impl MandelbrotRgbRamp {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap for MandelbrotRgbRamp {
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

        Ok(Colour::new(t, 1.0, 1.0 - t))
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotRgbRamp {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::RgbRamp
    }
}
