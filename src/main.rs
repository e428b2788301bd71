use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use winit::event_loop::EventLoop;

use backdrop::cli::Cli;
use backdrop::config::Config;
use backdrop::host::{App, SceneHost};
use backdrop::loaders::load_scene_file;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    config.validate().context("Invalid settings after command-line overrides")?;

    // A missing backdrop is not fatal: the camera still flies over an empty scene
    let scene = match &config.scene.model_path {
        Some(path) => match load_scene_file(path) {
            Ok(asset) => Some(asset.instantiate(config.scene.model_offset())),
            Err(e) => {
                warn!("{:#}", e);
                None
            }
        },
        None => None,
    };

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let host = SceneHost::new(&config, scene);
    let mut app = App::new(host, "Backdrop");

    info!("Controls: WASD/arrows to move, Shift to boost, wheel to dolly, click to look, Escape to release");
    event_loop.run_app(&mut app)?;

    Ok(())
}
