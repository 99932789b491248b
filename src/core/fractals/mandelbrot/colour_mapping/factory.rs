use crate::core::fractals::mandelbrot::colour_mapping::{
    kinds::MandelbrotColourMapKinds,
    map::MandelbrotColourMap,
    maps::{hsv_ramp::MandelbrotHsvRamp, rgb_ramp::MandelbrotRgbRamp},
};

#[must_use]
pub fn mandelbrot_colour_map_factory(
    kind: MandelbrotColourMapKinds,
    max_iterations: u32,
) -> Box<dyn MandelbrotColourMap> {
    match kind {
        MandelbrotColourMapKinds::HsvRamp => Box::new(MandelbrotHsvRamp::new(max_iterations)),
        MandelbrotColourMapKinds::RgbRamp => Box::new(MandelbrotRgbRamp::new(max_iterations)),
    }
}
