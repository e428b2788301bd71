// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "backdrop")]
#[command(about = "Free-fly camera over a 3D page backdrop", long_about = None)]
pub struct Cli {
    /// JSON config file; defaults are used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// glTF model to load, overrides the config file
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Run without loading any model
    #[arg(long = "no-model", conflicts_with = "model")]
    pub no_model: bool,

    /// Walking speed in units per second
    #[arg(long)]
    pub base_speed: Option<f32>,

    /// Scroll dolly speed in units per scroll-delta unit
    #[arg(long)]
    pub zoom_speed: Option<f32>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded config
    pub fn apply(&self, config: &mut Config) {
        if let Some(model) = &self.model {
            config.scene.model_path = Some(model.clone());
        }
        if self.no_model {
            config.scene.model_path = None;
        }
        if let Some(speed) = self.base_speed {
            config.movement.base_speed = speed;
        }
        if let Some(speed) = self.zoom_speed {
            config.zoom.zoom_speed = speed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["backdrop"]).unwrap();
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
        assert!(!cli.no_model);
    }

    #[test]
    fn test_overrides_applied() {
        let cli = Cli::try_parse_from([
            "backdrop",
            "--model",
            "temple.glb",
            "--base-speed",
            "4",
            "--zoom-speed",
            "0.01",
        ])
        .unwrap();

        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(config.scene.model_path, Some(PathBuf::from("temple.glb")));
        assert_eq!(config.movement.base_speed, 4.0);
        assert_eq!(config.zoom.zoom_speed, 0.01);
    }

    #[test]
    fn test_no_model() {
        let cli = Cli::try_parse_from(["backdrop", "--no-model"]).unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);
        assert!(config.scene.model_path.is_none());
    }

    #[test]
    fn test_model_conflicts_with_no_model() {
        assert!(Cli::try_parse_from(["backdrop", "--model", "a.gltf", "--no-model"]).is_err());
    }
}
