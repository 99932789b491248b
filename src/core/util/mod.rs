pub mod axis_ticks;
pub mod coordinate_mapper;
