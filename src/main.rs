use std::fs::File;
use std::io::{self, BufReader};

use clap::Parser;
use log::info;

use mandelbrot_explorer::{
    Cli, Mode, PpmFilePresenter, parse_script, run_explore, run_inspect, run_render,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let presenter = PpmFilePresenter::new();

    match cli.mode {
        Mode::Render(args) => {
            run_render(&args.into_settings()?, &presenter)?;
        }
        Mode::Inspect(args) => {
            let inspected = run_inspect(&args.into_settings())?;
            info!("Traced {} orbit(s)", inspected.len());
        }
        Mode::ZoomExplore(args) => {
            let commands = match &args.script {
                Some(path) => parse_script(BufReader::new(File::open(path)?))?,
                None => parse_script(io::stdin().lock())?,
            };
            info!("Replaying {} command(s)", commands.len());

            let summary = run_explore(&args.into_settings(), &commands, &presenter)?;
            info!(
                "Final region [{}, {}] x [{}, {}], max iterations {}{}",
                summary.region.min().real,
                summary.region.max().real,
                summary.region.min().imag,
                summary.region.max().imag,
                summary.max_iterations,
                if summary.at_precision_limit {
                    " (precision limit reached)"
                } else {
                    ""
                }
            );
        }
    }

    Ok(())
}
