use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};

use crate::controllers::interactive::RenderWorker;
use crate::controllers::interactive::errors::render_failure::RenderFailure;
use crate::controllers::interactive::ports::presenter::RenderWorkerPresenterPort;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::fractal_region::FractalRegion;
use crate::core::data::image_point::ImagePoint;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::viewport::controller::{Transition, ViewportController, ZoomDirection};
use crate::core::viewport::errors::ViewportError;
use crate::core::viewport::limits::ViewportLimits;
use crate::presenters::frame::latest_frame::LatestFramePresenter;

/// One pointer input. `None` coordinates mean the pointer is off the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExploreCommand {
    Zoom {
        direction: ZoomDirection,
        focal: Option<ImagePoint>,
    },
    Press(Option<ImagePoint>),
    Move(Option<ImagePoint>),
    Release,
    Reset,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExploreSettings {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub colour_map_kind: MandelbrotColourMapKinds,
    pub output_path: PathBuf,
    pub timeout: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExploreSummary {
    pub region: FractalRegion,
    pub max_iterations: u32,
    pub generation: u64,
    pub applied: usize,
    pub ignored: usize,
    pub at_precision_limit: bool,
}

#[derive(Debug)]
pub enum ExploreError {
    TimedOut { generation: u64 },
    RenderFailed(RenderFailure),
    NoFrame { generation: u64 },
}

impl fmt::Display for ExploreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TimedOut { generation } => {
                write!(f, "timed out waiting for render {}", generation)
            }
            Self::RenderFailed(failure) => write!(f, "{}", failure),
            Self::NoFrame { generation } => {
                write!(f, "render {} finished without a frame", generation)
            }
        }
    }
}

impl Error for ExploreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::RenderFailed(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Replays `commands` against a viewport backed by the background render
/// worker, then writes the last completed frame through `presenter`.
pub fn run_explore<P: FilePresenterPort>(
    settings: &ExploreSettings,
    commands: &[ExploreCommand],
    presenter: &P,
) -> Result<ExploreSummary, Box<dyn Error>> {
    let resolution = Resolution::new(settings.width, settings.height)?;
    let config = MandelbrotConfig::default()
        .with_max_iterations(settings.max_iterations)
        .with_colour_map(settings.colour_map_kind);

    let frames = Arc::new(LatestFramePresenter::new());
    let worker = RenderWorker::new(Arc::clone(&frames) as Arc<dyn RenderWorkerPresenterPort>);
    let mut controller =
        ViewportController::new(config, resolution, ViewportLimits::default(), worker)?;

    info!(
        "Exploring at {}x{}, max iterations {}",
        resolution.width(),
        resolution.height(),
        config.max_iterations
    );
    controller.refresh();

    let mut applied = 0;
    let mut ignored = 0;

    for command in commands {
        match apply(&mut controller, *command) {
            Ok(Transition::Applied) => applied += 1,
            Ok(Transition::Ignored) => ignored += 1,
            Err(err) if err.is_recoverable() => {
                warn!("{}", err);
                ignored += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }

    let worker = controller.render_port();
    let generation = worker.latest_generation();
    if !worker.wait_for_generation(generation, settings.timeout) {
        return Err(ExploreError::TimedOut { generation }.into());
    }

    if let Some(failure) = frames.take_failure() {
        return Err(ExploreError::RenderFailed(failure).into());
    }

    let frame = frames
        .take_frame()
        .ok_or(ExploreError::NoFrame { generation })?;

    presenter.present(&frame.render.colours, &settings.output_path)?;
    info!(
        "Saved render {} ({:?}) to {}",
        frame.generation,
        frame.render_duration,
        settings.output_path.display()
    );

    let snapshot = controller.snapshot();

    Ok(ExploreSummary {
        region: snapshot.region,
        max_iterations: snapshot.max_iterations,
        generation: frame.generation,
        applied,
        ignored,
        at_precision_limit: controller.at_precision_limit(),
    })
}

fn apply(
    controller: &mut ViewportController<RenderWorker>,
    command: ExploreCommand,
) -> Result<Transition, ViewportError> {
    match command {
        ExploreCommand::Zoom { direction, focal } => controller.zoom(focal, direction),
        ExploreCommand::Press(pointer) => Ok(controller.pointer_down(pointer)),
        ExploreCommand::Move(pointer) => controller.pointer_move(pointer),
        ExploreCommand::Release => Ok(controller.pointer_up()),
        ExploreCommand::Reset => Ok(controller.reset()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::mandelbrot_config::DEFAULT_REGION;
    use crate::presenters::file::ppm::PpmFilePresenter;

    fn settings(dir: &std::path::Path) -> ExploreSettings {
        ExploreSettings {
            width: 60,
            height: 40,
            max_iterations: 20,
            colour_map_kind: MandelbrotColourMapKinds::HsvRamp,
            output_path: dir.join("explore.ppm"),
            timeout: Duration::from_secs(10),
        }
    }

    #[test]
    fn test_zoom_in_writes_final_frame() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(dir.path());
        let commands = [ExploreCommand::Zoom {
            direction: ZoomDirection::In,
            focal: Some(ImagePoint::new(30.0, 20.0)),
        }];

        let summary = run_explore(&settings, &commands, &PpmFilePresenter::new()).unwrap();

        assert_eq!(summary.applied, 1);
        assert_eq!(summary.max_iterations, 22);
        assert!((summary.region.width() - DEFAULT_REGION.width() / 1.6).abs() < 1e-12);
        assert_eq!(summary.generation, 2);

        let bytes = std::fs::read(&settings.output_path).unwrap();
        assert!(bytes.starts_with(b"P6\n60 40\n255\n"));
    }

    #[test]
    fn test_drag_round_trip_and_off_surface_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let commands = [
            ExploreCommand::Zoom {
                direction: ZoomDirection::In,
                focal: None,
            },
            ExploreCommand::Press(Some(ImagePoint::new(10.0, 10.0))),
            ExploreCommand::Move(Some(ImagePoint::new(25.0, 3.0))),
            ExploreCommand::Move(None),
            ExploreCommand::Move(Some(ImagePoint::new(10.0, 10.0))),
            ExploreCommand::Release,
        ];

        let summary =
            run_explore(&settings(dir.path()), &commands, &PpmFilePresenter::new()).unwrap();

        assert_eq!(summary.region, DEFAULT_REGION);
        assert_eq!(summary.max_iterations, 20);
        assert_eq!(summary.applied, 4);
        assert_eq!(summary.ignored, 2);
    }

    #[test]
    fn test_invalid_budget_fails_before_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let settings = ExploreSettings {
            max_iterations: 1,
            ..settings(dir.path())
        };

        assert!(run_explore(&settings, &[], &PpmFilePresenter::new()).is_err());
        assert!(!settings.output_path.exists());
    }
}
