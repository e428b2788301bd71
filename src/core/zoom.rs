use glam::Vec3;
use log::trace;
use serde::{Deserialize, Serialize};
use winit::event::MouseScrollDelta;

use crate::traits::CameraRig;

pub const DEFAULT_ZOOM_SPEED: f32 = 0.004;
/// Pixel distance one wheel notch reports in browsers
pub const DEFAULT_PIXELS_PER_LINE: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// World units per unit of vertical scroll delta
    pub zoom_speed: f32,
    /// Scale for line-based wheel deltas
    pub pixels_per_line: f32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            zoom_speed: DEFAULT_ZOOM_SPEED,
            pixels_per_line: DEFAULT_PIXELS_PER_LINE,
        }
    }
}

/// Signed vertical scroll amount, positive when scrolling down (toward the user)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelDelta {
    pub delta_y: f32,
}

impl WheelDelta {
    pub fn new(delta_y: f32) -> Self {
        Self { delta_y }
    }

    /// winit reports positive y for scrolling up, so the sign flips
    pub fn from_winit(delta: &MouseScrollDelta, pixels_per_line: f32) -> Self {
        let delta_y = match *delta {
            MouseScrollDelta::LineDelta(_, y) => -y * pixels_per_line,
            MouseScrollDelta::PixelDelta(pos) => -(pos.y as f32),
        };
        Self { delta_y }
    }
}

/// Dollies the camera along its exact view direction on each wheel event.
/// No inertia: every event applies once and is done.
#[derive(Debug, Clone, Copy)]
pub struct ScrollZoomController {
    config: ZoomConfig,
}

impl ScrollZoomController {
    pub fn new(config: ZoomConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Apply one wheel event. Returns the displacement applied.
    pub fn on_wheel<C: CameraRig + ?Sized>(&self, camera: &mut C, delta: WheelDelta) -> Vec3 {
        let amount = delta.delta_y * self.config.zoom_speed;
        if amount == 0.0 || !amount.is_finite() {
            return Vec3::ZERO;
        }

        let offset = camera.forward() * amount;
        camera.translate(offset);
        trace!("dolly {:.4} -> {:?}", amount, camera.position());
        offset
    }
}

impl Default for ScrollZoomController {
    fn default() -> Self {
        Self::new(ZoomConfig::default())
    }
}
