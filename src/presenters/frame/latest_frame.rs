use std::sync::{Mutex, MutexGuard};

use log::warn;

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::render_failure::RenderFailure;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::RenderWorkerPresenterPort;

#[derive(Default)]
struct Latest {
    generation: u64,
    frame: Option<FrameData>,
    failure: Option<RenderFailure>,
}

/// Keeps only the newest frame the worker produced.
///
/// Events older than the last one presented are dropped, so a slow frame
/// arriving late never replaces a newer one.
#[derive(Default)]
pub struct LatestFramePresenter {
    latest: Mutex<Latest>,
}

impl LatestFramePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Latest> {
        match self.latest.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    #[must_use]
    pub fn last_presented_generation(&self) -> u64 {
        self.lock().generation
    }

    pub fn take_frame(&self) -> Option<FrameData> {
        self.lock().frame.take()
    }

    pub fn take_failure(&self) -> Option<RenderFailure> {
        self.lock().failure.take()
    }
}

impl RenderWorkerPresenterPort for LatestFramePresenter {
    fn present(&self, event: RenderEvent) {
        let mut latest = self.lock();

        if event.generation() <= latest.generation {
            return;
        }

        latest.generation = event.generation();
        match event {
            RenderEvent::Frame(frame) => {
                latest.frame = Some(frame);
                latest.failure = None;
            }
            RenderEvent::Error(failure) => {
                warn!("{}", failure);
                latest.failure = Some(failure);
            }
        }
    }
}
