//! Keyboard-driven fractal viewer.
//!
//! Keys: `S` start, `Left`/`Right` switch figure, `Up`/`Down` change level,
//! `1`-`6` jump to a figure, `Space` toggle spinning, `Esc`/`Q` quit.

mod app;
mod bridge;
mod config;
mod keymap;
mod state;

use anyhow::Result;
use fractal_engine::device::GpuInit;
use fractal_engine::logging::init_logging;
use fractal_engine::window::{RedrawPolicy, Runtime, RuntimeConfig};
use winit::dpi::LogicalSize;

use crate::app::ViewerApp;
use crate::config::ViewerConfig;

fn main() {
    if let Err(err) = run() {
        eprintln!("fractals: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = ViewerConfig::from_env()?;
    init_logging(config.logging.clone());

    match config.start {
        Some(kind) => log::info!("starting on {} (level {})", kind.name(), config.start_level),
        None => log::info!("press S to start"),
    }

    let runtime = RuntimeConfig {
        title: config.title.clone(),
        initial_size: LogicalSize::new(config.size.0, config.size.1),
        redraw: RedrawPolicy::OnDemand,
    };

    // Figure colors are display values; an sRGB target would brighten them.
    let gpu_init = GpuInit {
        prefer_srgb: false,
        ..GpuInit::default()
    };

    Runtime::run(runtime, gpu_init, ViewerApp::new(&config))
}
