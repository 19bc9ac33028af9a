//! Main application entry point.

use ripplekit_app::{AppConfig, Host};
use ripplekit_render::VelloSurface;

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match AppConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => AppConfig::default(),
    };
    log::info!("Starting {}", config.title);

    let mut host = Host::new(&config, VelloSurface::new());
    if let Err(e) = host.run_script(&config.script) {
        log::error!("Ripple frame failed: {}", e);
        std::process::exit(1);
    }

    let frames = host.take_frames();
    let peak = frames.iter().map(|frame| frame.radius).max().unwrap_or(0);
    log::info!(
        "Rendered {} frames over {:?}, peak radius {}",
        frames.len(),
        host.scheduler().now(),
        peak
    );
}
