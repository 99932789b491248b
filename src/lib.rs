pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;
pub mod storage;

pub use crate::controllers::explore::{ExploreCommand, ExploreSettings, ExploreSummary, run_explore};
pub use crate::controllers::inspect::{InspectSettings, InspectedPixel, run_inspect};
pub use crate::controllers::interactive::RenderWorker;
pub use crate::controllers::render::{RenderSettings, run_render};
pub use crate::core::actions::render::render::{Render, RenderError, RenderRequest, render};
pub use crate::core::viewport::controller::{Transition, ViewportController, ZoomDirection};
pub use crate::input::cli::args::{Cli, Mode};
pub use crate::input::cli::script::parse_script;
pub use crate::presenters::file::ppm::PpmFilePresenter;
pub use crate::storage::image_cache::ImageCache;
