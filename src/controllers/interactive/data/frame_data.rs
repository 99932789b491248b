use std::time::Duration;

use crate::core::actions::render::render::{Render, RenderRequest};

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub request: RenderRequest,
    pub render: Render,
    pub render_duration: Duration,
}
