use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::render_failure::RenderFailure;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::RenderWorkerPresenterPort;
use crate::core::actions::cancellation::SupersededBy;
use crate::core::actions::render::render::{RenderError, RenderRequest, render_cancelable};
use crate::core::viewport::ports::render_port::RenderPort;
use log::{debug, info, warn};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: Mutex<u64>,
    completed: Condvar,
    latest_request: Mutex<Option<(u64, RenderRequest)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn RenderWorkerPresenterPort>,
}

// Guarded values stay consistent across every critical section.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Renders the newest submitted request on a background thread.
///
/// Requests are never queued: submitting replaces any request still waiting
/// and cancels the one in flight.
pub struct RenderWorker {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl RenderWorker {
    pub fn new(presenter_port: Arc<dyn RenderWorkerPresenterPort>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: Mutex::new(0),
            completed: Condvar::new(),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    pub fn submit_request(&self, request: RenderRequest) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = lock(&self.shared.latest_request);
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        // stored under the request lock so the worker cannot miss the wake-up
        // between checking the flag and waiting
        {
            let _guard = lock(&self.shared.latest_request);
            self.shared.shutdown.store(true, Ordering::Release);
        }
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                warn!("Render worker thread panicked");
            }
        }
    }

    /// Generation of the most recently submitted request.
    #[must_use]
    pub fn latest_generation(&self) -> u64 {
        self.shared.generation.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        *lock(&self.shared.last_completed_generation)
    }

    /// Blocks until `generation` (or a newer one) has produced an event.
    ///
    /// Returns `false` on timeout.
    pub fn wait_for_generation(&self, generation: u64, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut completed = lock(&self.shared.last_completed_generation);

        while *completed < generation {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }

            completed = match self.shared.completed.wait_timeout(completed, remaining) {
                Ok((guard, _)) => guard,
                Err(poisoned) => poisoned.into_inner().0,
            };
        }

        true
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut guard = lock(&shared.latest_request);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(req) = guard.take() {
                        break req;
                    }

                    guard = match shared.wake.wait(guard) {
                        Ok(guard) => guard,
                        Err(poisoned) => poisoned.into_inner(),
                    };
                }
            };

            let cancel_token =
                SupersededBy::new(job_generation, &shared.generation, &shared.shutdown);
            let progress = |percent: u8| debug!("Render {}: {}%", job_generation, percent);

            let start = Instant::now();
            let result = render_cancelable(&request, &cancel_token, &progress);
            let render_duration = start.elapsed();

            let event = match result {
                Ok(render) => {
                    info!(
                        "Render {} finished in {:?} ({}x{}, max iterations {})",
                        job_generation,
                        render_duration,
                        request.frame.width(),
                        request.frame.height(),
                        request.max_iterations
                    );

                    RenderEvent::Frame(FrameData {
                        generation: job_generation,
                        request,
                        render,
                        render_duration,
                    })
                }
                Err(RenderError::Cancelled(_)) => {
                    debug!("Render {} cancelled", job_generation);
                    continue;
                }
                Err(err) => {
                    warn!("Render {} failed: {}", job_generation, err);

                    RenderEvent::Error(RenderFailure {
                        generation: job_generation,
                        message: err.to_string(),
                    })
                }
            };

            if job_generation != shared.generation.load(Ordering::Acquire) {
                continue;
            }

            shared.presenter_port.present(event);

            *lock(&shared.last_completed_generation) = job_generation;
            shared.completed.notify_all();
        }
    }
}

impl RenderPort for RenderWorker {
    fn submit(&self, request: RenderRequest) -> u64 {
        self.submit_request(request)
    }
}

impl Drop for RenderWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
