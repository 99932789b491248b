use log::{debug, info};

use crate::core::data::fractal_region::FractalRegion;
use crate::core::data::image_frame::ImageFrame;
use crate::core::data::image_point::ImagePoint;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::util::coordinate_mapper::image_to_fractal;
use crate::core::viewport::errors::ViewportError;
use crate::core::viewport::limits::ViewportLimits;
use crate::core::viewport::ports::render_port::RenderPort;
use crate::core::viewport::state::{InteractionState, ViewportSnapshot, ViewportState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Whether an input changed the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored,
}

/// Sole owner of the viewport state. Every applied transition issues one
/// render request through the port; rejected transitions leave the state
/// untouched.
pub struct ViewportController<R: RenderPort> {
    config: MandelbrotConfig,
    limits: ViewportLimits,
    state: ViewportState,
    interaction: InteractionState,
    last_pointer: Option<ImagePoint>,
    at_precision_limit: bool,
    render_port: R,
}

impl<R: RenderPort> ViewportController<R> {
    pub fn new(
        config: MandelbrotConfig,
        resolution: Resolution,
        limits: ViewportLimits,
        render_port: R,
    ) -> Result<Self, ViewportError> {
        limits.validate()?;
        config.validate()?;

        Ok(Self {
            config,
            limits,
            state: ViewportState::new(config.region, resolution, config.max_iterations),
            interaction: InteractionState::Idle,
            last_pointer: None,
            at_precision_limit: false,
            render_port,
        })
    }

    #[must_use]
    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    #[must_use]
    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    #[must_use]
    pub fn snapshot(&self) -> ViewportSnapshot {
        self.state.snapshot()
    }

    #[must_use]
    pub fn at_precision_limit(&self) -> bool {
        self.at_precision_limit
    }

    #[must_use]
    pub fn render_port(&self) -> &R {
        &self.render_port
    }

    /// Renders the current view without changing it.
    pub fn refresh(&self) -> u64 {
        self.request_render()
    }

    /// Zooms about the fractal point under `focal`.
    ///
    /// Ignored while dragging, when the pointer is off the surface, and when
    /// a zoom-out would exceed the maximum extent.
    pub fn zoom(
        &mut self,
        focal: Option<ImagePoint>,
        direction: ZoomDirection,
    ) -> Result<Transition, ViewportError> {
        if self.interaction != InteractionState::Idle {
            return Ok(Transition::Ignored);
        }

        let Some(focal) = self.on_surface(focal) else {
            return Ok(Transition::Ignored);
        };

        if direction == ZoomDirection::In && self.at_precision_limit {
            return Err(ViewportError::PrecisionExhausted);
        }

        self.interaction = InteractionState::Zooming;
        let outcome = self.apply_zoom(focal, direction);
        self.interaction = InteractionState::Idle;

        outcome
    }

    fn apply_zoom(
        &mut self,
        focal: ImagePoint,
        direction: ZoomDirection,
    ) -> Result<Transition, ViewportError> {
        let region = self.state.region();
        let resolution = self.state.resolution();
        let centre = image_to_fractal(&region, resolution, focal);
        let zoom_in = direction == ZoomDirection::In;

        let scale = if zoom_in {
            1.0 / self.limits.zoom_factor
        } else {
            self.limits.zoom_factor
        };

        let zoomed = match region.scaled_about(centre, scale) {
            Ok(zoomed) => zoomed,
            Err(_) if zoom_in => return self.precision_exhausted(),
            Err(err) => return Err(err.into()),
        };

        if zoom_in && steps_below_spacing(&zoomed, resolution) {
            return self.precision_exhausted();
        }

        if !zoom_in
            && (zoomed.width() > self.limits.max_region_extent
                || zoomed.height() > self.limits.max_region_extent)
        {
            debug!(
                "Zoom out ignored: extent {:.3} x {:.3} exceeds {}",
                zoomed.width(),
                zoomed.height(),
                self.limits.max_region_extent
            );
            return Ok(Transition::Ignored);
        }

        let max_iterations = self
            .limits
            .adjust_iterations(self.state.max_iterations(), zoom_in);

        if max_iterations != self.state.max_iterations() {
            info!(
                "Max iterations {} -> {}",
                self.state.max_iterations(),
                max_iterations
            );
        }

        self.state = self.state.reanchored(zoomed, max_iterations);
        if !zoom_in {
            self.at_precision_limit = false;
        }

        debug!(
            "Zoomed {:?} about ({}, {}): width {:e}",
            direction,
            centre.real,
            centre.imag,
            zoomed.width()
        );

        self.request_render();

        Ok(Transition::Applied)
    }

    fn precision_exhausted(&mut self) -> Result<Transition, ViewportError> {
        info!("Zoom precision exhausted, keeping the current region");
        self.at_precision_limit = true;
        Err(ViewportError::PrecisionExhausted)
    }

    pub fn pointer_down(&mut self, pointer: Option<ImagePoint>) -> Transition {
        if self.interaction != InteractionState::Idle {
            return Transition::Ignored;
        }

        let Some(pointer) = self.on_surface(pointer) else {
            return Transition::Ignored;
        };

        self.interaction = InteractionState::Dragging;
        self.last_pointer = Some(pointer);

        Transition::Applied
    }

    /// Pans by the pointer movement since the previous sample.
    pub fn pointer_move(
        &mut self,
        pointer: Option<ImagePoint>,
    ) -> Result<Transition, ViewportError> {
        if self.interaction != InteractionState::Dragging {
            return Ok(Transition::Ignored);
        }

        let (Some(pointer), Some(last)) = (self.on_surface(pointer), self.last_pointer) else {
            return Ok(Transition::Ignored);
        };

        let dx = pointer.x - last.x;
        let dy = pointer.y - last.y;

        if dx == 0.0 && dy == 0.0 {
            return Ok(Transition::Ignored);
        }

        self.state = self.state.panned_by(dx, dy)?;
        self.last_pointer = Some(pointer);
        self.request_render();

        Ok(Transition::Applied)
    }

    pub fn pointer_up(&mut self) -> Transition {
        if self.interaction != InteractionState::Dragging {
            return Transition::Ignored;
        }

        self.interaction = InteractionState::Idle;
        self.last_pointer = None;

        Transition::Applied
    }

    /// Returns to the configured starting region and iteration budget.
    pub fn reset(&mut self) -> Transition {
        self.state = ViewportState::new(
            self.config.region,
            self.state.resolution(),
            self.config.max_iterations,
        );
        self.interaction = InteractionState::Idle;
        self.last_pointer = None;
        self.at_precision_limit = false;
        self.request_render();

        Transition::Applied
    }

    fn on_surface(&self, pointer: Option<ImagePoint>) -> Option<ImagePoint> {
        pointer.filter(|&p| self.state.resolution().contains_point(p))
    }

    fn request_render(&self) -> u64 {
        let request = self.state.snapshot().render_request(self.config.colour_map_kind);
        self.render_port.submit(request)
    }
}

/// True when a pixel step is no larger than the `f64` spacing at the
/// region's largest corner coordinate.
fn steps_below_spacing(region: &FractalRegion, resolution: Resolution) -> bool {
    let frame = ImageFrame::new(resolution, region);
    let magnitude = [
        region.min().real.abs(),
        region.max().real.abs(),
        region.min().imag.abs(),
        region.max().imag.abs(),
    ]
    .into_iter()
    .fold(0.0_f64, f64::max);
    let spacing = f64::EPSILON * magnitude;

    frame.x_step() <= spacing || frame.y_step() <= spacing
}
