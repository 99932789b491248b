pub mod generate_colour_field;
pub mod ports;
