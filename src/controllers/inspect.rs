use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use log::{debug, info};

use crate::core::data::image_point::ImagePoint;
use crate::core::fractals::mandelbrot::mandelbrot_config::DEFAULT_REGION;
use crate::core::fractals::mandelbrot::orbit::{OrbitTracer, TracedOrbit};
use crate::core::util::axis_ticks::axis_ticks;
use crate::storage::image_cache::ImageCache;

#[derive(Debug, Clone, PartialEq)]
pub struct InspectSettings {
    pub cache_dir: PathBuf,
    pub pixels: Vec<ImagePoint>,
    pub tick_count: usize,
}

/// One requested pixel and its orbit, `None` when the pixel lies outside
/// the cached image.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectedPixel {
    pub pixel: ImagePoint,
    pub orbit: Option<TracedOrbit>,
}

/// Loads the cached image rendered over the default region and traces an
/// orbit for every requested pixel.
pub fn run_inspect(settings: &InspectSettings) -> Result<Vec<InspectedPixel>, Box<dyn Error>> {
    let cache = ImageCache::new(&settings.cache_dir);

    let start = Instant::now();
    let (metadata, colours) = cache.load_stored()?;
    info!("Loading time: {:?}", start.elapsed());

    let resolution = colours.resolution();
    info!(
        "Cached image: {:?} (height, width, channels), max iterations {}",
        colours.shape(),
        metadata.max_iterations
    );

    let ticks = axis_ticks(&DEFAULT_REGION, resolution, settings.tick_count);
    for tick in ticks.real.iter().chain(ticks.imag.iter()) {
        debug!("Tick at pixel {:.1}: {}", tick.pixel, tick.label);
    }

    let tracer = OrbitTracer::new(DEFAULT_REGION, resolution, metadata.max_iterations)?;

    let inspected = settings
        .pixels
        .iter()
        .map(|&pixel| {
            let orbit = tracer.trace_pixel(Some(pixel));
            report(pixel, orbit.as_ref());
            InspectedPixel { pixel, orbit }
        })
        .collect();

    Ok(inspected)
}

fn report(pixel: ImagePoint, orbit: Option<&TracedOrbit>) {
    let Some(orbit) = orbit else {
        info!("Pixel ({}, {}) is outside the image", pixel.x, pixel.y);
        return;
    };

    let seed = orbit.sequence.seed();
    match orbit.sequence.escaped_at() {
        Some(step) => info!(
            "Pixel ({}, {}) = {} {:+}i escapes at step {}",
            pixel.x, pixel.y, seed.real, seed.imag, step
        ),
        None => info!(
            "Pixel ({}, {}) = {} {:+}i stays bounded for {} steps",
            pixel.x,
            pixel.y,
            seed.real,
            seed.imag,
            orbit.sequence.len() - 1
        ),
    }

    for point in &orbit.path {
        debug!("  ({:.2}, {:.2})", point.x, point.y);
    }
}
