use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use log::{debug, info};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::cancellation::NeverCancel;
use crate::core::actions::render::render::{RenderRequest, render_cancelable};
use crate::core::data::image_frame::ImageFrame;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::util::axis_ticks::axis_ticks;
use crate::storage::image_cache::ImageCache;
use crate::storage::metadata::CacheMetadata;

const AXIS_TICKS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub colour_map_kind: MandelbrotColourMapKinds,
    pub cache_dir: PathBuf,
    pub ppm_path: Option<PathBuf>,
}

/// Renders the starting view once, stores it in the image cache and
/// optionally writes a PPM preview.
pub fn run_render<P: FilePresenterPort>(
    settings: &RenderSettings,
    presenter: &P,
) -> Result<CacheMetadata, Box<dyn Error>> {
    let resolution = Resolution::new(settings.width, settings.height)?;
    let config = MandelbrotConfig::default()
        .with_max_iterations(settings.max_iterations)
        .with_colour_map(settings.colour_map_kind);
    config.validate()?;

    let frame = ImageFrame::new(resolution, &config.region);
    let request = RenderRequest::new(config.region, frame, config.max_iterations)
        .with_colour_map(config.colour_map_kind);

    info!("Rendering Mandelbrot set...");
    info!("Image size: {}x{}", resolution.width(), resolution.height());
    info!("Max iterations: {}", config.max_iterations);
    info!("Colour map: {}", config.colour_map_kind);

    let progress = |percent: u8| {
        if percent % 10 == 0 {
            info!("Rendered {}%", percent);
        }
    };

    let start = Instant::now();
    let render = render_cancelable(&request, &NeverCancel, &progress)?;
    info!("Rendering time: {:?}", start.elapsed());
    info!(
        "Interior pixels: {} of {}",
        render.iterations.interior_count(),
        resolution.pixel_count()
    );

    let cache = ImageCache::new(&settings.cache_dir);
    let start = Instant::now();
    let metadata = cache.store(&render.colours, config.max_iterations)?;
    info!("Saving time: {:?}", start.elapsed());
    info!("Stored in {}", cache.dir().display());

    if let Some(ppm_path) = &settings.ppm_path {
        presenter.present(&render.colours, ppm_path)?;
        info!("Saved preview to {}", ppm_path.display());
    }

    let ticks = axis_ticks(&config.region, resolution, AXIS_TICKS);
    debug!(
        "Real axis: {}",
        ticks.real.iter().map(|t| t.label.as_str()).collect::<Vec<_>>().join(" ")
    );
    debug!(
        "Imaginary axis: {}",
        ticks.imag.iter().map(|t| t.label.as_str()).collect::<Vec<_>>().join(" ")
    );

    Ok(metadata)
}
