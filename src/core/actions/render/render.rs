use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_colour_field::generate_colour_field::{
    GenerateColourFieldError, generate_colour_field_cancelable,
};
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon_cancelable;
use crate::core::actions::progress::{NoProgress, ProgressSink};
use crate::core::data::colour_field::ColourField;
use crate::core::data::fractal_region::FractalRegion;
use crate::core::data::image_frame::ImageFrame;
use crate::core::data::iteration_field::{IterationField, IterationFieldError};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use std::error::Error;
use std::fmt;

/// Everything one render needs, captured at submission time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub region: FractalRegion,
    pub frame: ImageFrame,
    pub max_iterations: u32,
    pub colour_map_kind: MandelbrotColourMapKinds,
}

impl RenderRequest {
    #[must_use]
    pub fn new(region: FractalRegion, frame: ImageFrame, max_iterations: u32) -> Self {
        Self {
            region,
            frame,
            max_iterations,
            colour_map_kind: MandelbrotColourMapKinds::default(),
        }
    }

    #[must_use]
    pub fn with_colour_map(self, colour_map_kind: MandelbrotColourMapKinds) -> Self {
        Self {
            colour_map_kind,
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Render {
    pub iterations: IterationField,
    pub colours: ColourField,
}

#[derive(Debug, PartialEq)]
pub enum RenderError {
    InvalidConfiguration(MandelbrotError),
    Cancelled(Cancelled),
    IterationField(IterationFieldError),
    Colouring(GenerateColourFieldError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(err) => write!(f, "invalid render configuration: {}", err),
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::IterationField(err) => write!(f, "iteration field error: {}", err),
            Self::Colouring(err) => write!(f, "{}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidConfiguration(err) => Some(err),
            Self::Cancelled(c) => Some(c),
            Self::IterationField(err) => Some(err),
            Self::Colouring(err) => Some(err),
        }
    }
}

impl From<MandelbrotError> for RenderError {
    fn from(err: MandelbrotError) -> Self {
        Self::InvalidConfiguration(err)
    }
}

impl From<Cancelled> for RenderError {
    fn from(c: Cancelled) -> Self {
        Self::Cancelled(c)
    }
}

impl From<IterationFieldError> for RenderError {
    fn from(err: IterationFieldError) -> Self {
        Self::IterationField(err)
    }
}

impl From<GenerateColourFieldError> for RenderError {
    fn from(err: GenerateColourFieldError) -> Self {
        match err {
            GenerateColourFieldError::Cancelled(c) => Self::Cancelled(c),
            other => Self::Colouring(other),
        }
    }
}

/// Computes the escape-count field for `region` sampled on `frame`, then
/// colours it with the default ramp.
pub fn render(
    region: FractalRegion,
    frame: ImageFrame,
    max_iterations: u32,
) -> Result<Render, RenderError> {
    render_cancelable(
        &RenderRequest::new(region, frame, max_iterations),
        &NeverCancel,
        &NoProgress,
    )
}

/// Like [`render`], with a choice of colour map, a cancel token polled
/// during both passes and percent-complete reports for the counting pass.
///
/// Fails fast on invalid configuration before any pixel is computed. A
/// cancelled render returns nothing.
pub fn render_cancelable<C, P>(
    request: &RenderRequest,
    cancel: &C,
    progress: &P,
) -> Result<Render, RenderError>
where
    C: CancelToken,
    P: ProgressSink + ?Sized,
{
    let algorithm =
        MandelbrotAlgorithm::new(&request.region, &request.frame, request.max_iterations)?;
    let resolution = request.frame.resolution();

    let counts =
        generate_fractal_parallel_rayon_cancelable(resolution, &algorithm, cancel, progress)?;
    let iterations = IterationField::from_counts(resolution, request.max_iterations, counts)?;

    if cancel.is_cancelled() {
        return Err(RenderError::Cancelled(Cancelled));
    }

    let colour_map = mandelbrot_colour_map_factory(request.colour_map_kind, request.max_iterations);
    let colours = generate_colour_field_cancelable(&iterations, colour_map.as_ref(), cancel)?;

    Ok(Render { iterations, colours })
}
