//! Background rendering for interactive exploration.
//!
//! The viewport submits render requests through [`RenderPort`]; the worker
//! renders the newest one on its own thread and hands finished frames to a
//! presenter port. Superseded work is cancelled and never reported.
//!
//! [`RenderPort`]: crate::core::viewport::ports::render_port::RenderPort

pub mod data;
pub mod errors;
pub mod events;
pub mod ports;
mod render_worker;

pub use render_worker::RenderWorker;
