pub mod explore;
pub mod inspect;
pub mod interactive;
pub mod ports;
pub mod render;
