// config.rs - Tunables and initial scene setup, loaded from optional JSON
use anyhow::{bail, Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::camera::Camera;
use crate::core::look::LookConfig;
use crate::core::mover::MovementConfig;
use crate::core::zoom::ZoomConfig;

pub const DEFAULT_MODEL_PATH: &str = "model/mountain_temple/scene.gltf";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub initial_position: [f32; 3],
    /// Point the camera faces at startup
    pub look_at: [f32; 3],
    pub fov_degrees: f32,
    /// glTF backdrop model; `None` runs with an empty scene
    pub model_path: Option<PathBuf>,
    /// Translation applied to the model instance
    pub model_offset: [f32; 3],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            initial_position: [5.0, 3.0, 6.0],
            look_at: [0.0, 0.0, 0.0],
            fov_degrees: 50.0,
            model_path: Some(PathBuf::from(DEFAULT_MODEL_PATH)),
            model_offset: [0.0, -1.0, 0.0],
        }
    }
}

impl SceneConfig {
    pub fn initial_camera(&self) -> Camera {
        Camera::looking_at(
            Vec3::from_array(self.initial_position),
            Vec3::from_array(self.look_at),
        )
    }

    pub fn model_offset(&self) -> Vec3 {
        Vec3::from_array(self.model_offset)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub movement: MovementConfig,
    pub zoom: ZoomConfig,
    pub look: LookConfig,
    pub scene: SceneConfig,
}

impl Config {
    /// Load from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_json(&text).with_context(|| format!("Invalid config file: {:?}", path))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(text).context("Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let m = &self.movement;
        if !m.base_speed.is_finite() || m.base_speed < 0.0 {
            bail!("movement.base_speed must be a non-negative number, got {}", m.base_speed);
        }
        if !m.boost_multiplier.is_finite() || m.boost_multiplier <= 0.0 {
            bail!("movement.boost_multiplier must be positive, got {}", m.boost_multiplier);
        }

        let z = &self.zoom;
        if !z.zoom_speed.is_finite() || z.zoom_speed < 0.0 {
            bail!("zoom.zoom_speed must be a non-negative number, got {}", z.zoom_speed);
        }
        if !z.pixels_per_line.is_finite() || z.pixels_per_line <= 0.0 {
            bail!("zoom.pixels_per_line must be positive, got {}", z.pixels_per_line);
        }

        if !self.look.sensitivity.is_finite() {
            bail!("look.sensitivity must be finite");
        }

        let s = &self.scene;
        let finite = |v: &[f32; 3]| v.iter().all(|c| c.is_finite());
        if !finite(&s.initial_position) || !finite(&s.look_at) || !finite(&s.model_offset) {
            bail!("scene vectors must be finite");
        }
        if !(s.fov_degrees > 0.0 && s.fov_degrees < 180.0) {
            bail!("scene.fov_degrees must be in (0, 180), got {}", s.fov_degrees);
        }
        Ok(())
    }
}
