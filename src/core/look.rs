use serde::{Deserialize, Serialize};

use crate::camera::{Camera, MAX_PITCH};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookConfig {
    /// Radians per pixel of mouse motion
    pub sensitivity: f32,
}

impl Default for LookConfig {
    fn default() -> Self {
        Self { sensitivity: 0.002 }
    }
}

/// Pointer-lock look control. The only writer of camera orientation.
#[derive(Debug, Clone)]
pub struct PointerLook {
    config: LookConfig,
    locked: bool,
}

impl PointerLook {
    pub fn new(config: LookConfig) -> Self {
        Self {
            config,
            locked: false,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Apply raw mouse motion. Ignored unless the pointer is locked.
    /// Moving the mouse right turns right, moving it up looks up.
    pub fn on_mouse_motion(&self, camera: &mut Camera, dx: f64, dy: f64) {
        if !self.locked {
            return;
        }
        let s = self.config.sensitivity;
        camera.yaw = wrap_angle(camera.yaw - dx as f32 * s);
        camera.pitch = (camera.pitch - dy as f32 * s).clamp(-MAX_PITCH, MAX_PITCH);
    }
}

impl Default for PointerLook {
    fn default() -> Self {
        Self::new(LookConfig::default())
    }
}

fn wrap_angle(a: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    (a + PI).rem_euclid(TAU) - PI
}
