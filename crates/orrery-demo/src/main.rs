//! Toy solar system: a sun, an earth and a moon animated through the orrery
//! scene graph.

mod app;
mod config;
mod solar;

use anyhow::Result;

use orrery_engine::logging::{init_logging, LoggingConfig};
use orrery_engine::window::{Runtime, RuntimeConfig};

use crate::app::OrreryApp;
use crate::config::SolarSystemConfig;
use crate::solar::{build_scene, load_shader};

fn run() -> Result<()> {
    let config = SolarSystemConfig::from_env();
    let shader = load_shader(config.shader_dir.as_deref())?;
    let scene = build_scene(&config, shader);
    log::info!(
        "solar system ready: {} engines, camera {:?}",
        scene.engine_count(),
        config.camera_bounds
    );

    let gpu_init = config.gpu_init();
    let app = OrreryApp::new(&config, scene);
    Runtime::run(RuntimeConfig::default(), gpu_init, app)
}

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(err) = run() {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}
