use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::controllers::explore::ExploreSettings;
use crate::controllers::inspect::InspectSettings;
use crate::controllers::render::RenderSettings;
use crate::core::data::image_point::ImagePoint;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

const DEFAULT_CACHE_DIR: &str = "assets/fractal";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgsError {
    WidthOverflow { height: u32 },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WidthOverflow { height } => write!(
                f,
                "default width for height {} does not fit in u32, pass --width",
                height
            ),
        }
    }
}

impl Error for ArgsError {}

/// `1.5 × height`, rounded half up.
fn default_width(height: u32) -> Result<u32, ArgsError> {
    u32::try_from((u64::from(height) * 3 + 1) / 2).map_err(|_| ArgsError::WidthOverflow { height })
}

#[derive(Parser, Debug)]
#[command(name = "mandelbrot_explorer")]
#[command(version, about = "Escape-time Mandelbrot renderer, orbit inspector and zoom explorer")]
pub struct Cli {
    #[command(subcommand)]
    pub mode: Mode,
}

/// Chosen once at startup; each mode has its own driver.
#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Render the default view and store it in the image cache
    Render(RenderArgs),
    /// Load the cached image and trace orbits for chosen pixels
    Inspect(InspectArgs),
    /// Replay a zoom/drag script against the interactive viewport
    ZoomExplore(ExploreArgs),
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Image height in pixels
    #[arg(long, default_value_t = 1600)]
    pub height: u32,

    /// Image width in pixels [default: 1.5 x height]
    #[arg(long)]
    pub width: Option<u32>,

    #[arg(short, long, default_value_t = 100)]
    pub max_iterations: u32,

    #[arg(long, value_enum, default_value_t = MandelbrotColourMapKinds::HsvRamp)]
    pub colour_map: MandelbrotColourMapKinds,

    /// Directory receiving fractal_image.dat and metadata.json
    #[arg(long, default_value = DEFAULT_CACHE_DIR)]
    pub cache_dir: PathBuf,

    /// Also write a PPM preview here
    #[arg(long)]
    pub ppm: Option<PathBuf>,
}

impl RenderArgs {
    pub fn into_settings(self) -> Result<RenderSettings, ArgsError> {
        let width = match self.width {
            Some(width) => width,
            None => default_width(self.height)?,
        };

        Ok(RenderSettings {
            width,
            height: self.height,
            max_iterations: self.max_iterations,
            colour_map_kind: self.colour_map,
            cache_dir: self.cache_dir,
            ppm_path: self.ppm,
        })
    }
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    #[arg(long, default_value = DEFAULT_CACHE_DIR)]
    pub cache_dir: PathBuf,

    /// Pixel to trace, as X,Y (repeatable)
    #[arg(short, long = "pixel", value_parser = parse_pixel)]
    pub pixels: Vec<ImagePoint>,

    /// Number of axis ticks to report per axis
    #[arg(long, default_value_t = 5)]
    pub ticks: usize,
}

impl InspectArgs {
    #[must_use]
    pub fn into_settings(self) -> InspectSettings {
        InspectSettings {
            cache_dir: self.cache_dir,
            pixels: self.pixels,
            tick_count: self.ticks,
        }
    }
}

#[derive(Args, Debug)]
pub struct ExploreArgs {
    #[arg(long, default_value_t = 750)]
    pub width: u32,

    #[arg(long, default_value_t = 500)]
    pub height: u32,

    #[arg(short, long, default_value_t = 75)]
    pub max_iterations: u32,

    #[arg(long, value_enum, default_value_t = MandelbrotColourMapKinds::HsvRamp)]
    pub colour_map: MandelbrotColourMapKinds,

    /// Command script; read from stdin when omitted
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Where the last completed frame is written
    #[arg(short, long, default_value = "output/explore.ppm")]
    pub output: PathBuf,

    /// Seconds to wait for the final render
    #[arg(long, default_value_t = 60)]
    pub timeout_secs: u64,
}

impl ExploreArgs {
    #[must_use]
    pub fn into_settings(self) -> ExploreSettings {
        ExploreSettings {
            width: self.width,
            height: self.height,
            max_iterations: self.max_iterations,
            colour_map_kind: self.colour_map,
            output_path: self.output,
            timeout: std::time::Duration::from_secs(self.timeout_secs),
        }
    }
}

fn parse_pixel(value: &str) -> Result<ImagePoint, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", value))?;

    let x = x
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("bad x coordinate '{}': {}", x, err))?;
    let y = y
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("bad y coordinate '{}': {}", y, err))?;

    Ok(ImagePoint::new(x, y))
}
