use crate::core::actions::generate_colour_field::ports::colour_map::ColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

pub trait MandelbrotColourMap: ColourMap {
    fn kind(&self) -> MandelbrotColourMapKinds;
}

/// Position of an escaping count on the ramp, `count / (max - 1)`.
///
/// Callers must have rejected `count >= max_iterations` already.
#[must_use]
pub(crate) fn ramp_position(count: u32, max_iterations: u32) -> f32 {
    (f64::from(count) / f64::from(max_iterations - 1)) as f32
}
