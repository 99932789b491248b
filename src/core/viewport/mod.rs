pub mod controller;
pub mod errors;
pub mod limits;
pub mod ports;
pub mod state;
