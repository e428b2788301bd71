pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod host;
pub mod loaders;
pub mod math;
pub mod traits;

pub use camera::Camera;
pub use config::Config;
pub use host::{App, SceneHost};
