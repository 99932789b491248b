pub mod cancellation;
pub mod generate_colour_field;
pub mod generate_fractal;
pub mod progress;
pub mod render;
