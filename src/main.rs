use clap::Parser;
use log::info;
use mandelbrot_explorer::{ExplorerConfig, InputEvent, PpmFilePresenter, SnapshotController};
use std::path::PathBuf;

/// Renders a Mandelbrot explorer snapshot to a PPM file, optionally after
/// replaying a scripted session.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[arg(long, default_value_t = ExplorerConfig::default().width)]
    width: u32,

    #[arg(long, default_value_t = ExplorerConfig::default().height)]
    height: u32,

    /// Pixels per plane unit
    #[arg(long, default_value_t = ExplorerConfig::default().zoom)]
    zoom: u32,

    /// Starting iteration budget
    #[arg(long, default_value_t = ExplorerConfig::default().max_iterations)]
    iterations: u32,

    #[arg(long, default_value = "output/mandelbrot.ppm")]
    output: PathBuf,

    /// Input to replay before the snapshot, in order: press:x,y, drag:x,y,
    /// release, more, less, in or out
    #[arg(long = "event", value_name = "EVENT")]
    events: Vec<InputEvent>,
}

impl Args {
    fn config(&self) -> ExplorerConfig {
        ExplorerConfig {
            width: self.width,
            height: self.height,
            zoom: self.zoom,
            max_iterations: self.iterations,
            ..ExplorerConfig::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    info!("replaying {} event(s)", args.events.len());

    let mut controller = SnapshotController::new(PpmFilePresenter::new(), args.config())?;
    controller.replay(&args.events)?;
    controller.write(&args.output)?;

    Ok(())
}
