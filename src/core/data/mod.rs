pub mod colour;
pub mod colour_field;
pub mod complex;
pub mod fractal_region;
pub mod image_frame;
pub mod image_point;
pub mod iteration_field;
pub mod resolution;
