use glam::Vec3;
use log::trace;
use serde::{Deserialize, Serialize};

use super::frame::FrameDelta;
use crate::math::{horizontal, right_of, unit_or_zero};
use crate::traits::{CameraRig, InputSource};

pub const DEFAULT_BASE_SPEED: f32 = 8.0;
pub const DEFAULT_BOOST_MULTIPLIER: f32 = 3.0;

/// Walking speed tunables
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// World units per second
    pub base_speed: f32,
    /// Speed factor while boost is held
    pub boost_multiplier: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            base_speed: DEFAULT_BASE_SPEED,
            boost_multiplier: DEFAULT_BOOST_MULTIPLIER,
        }
    }
}

/// Turns held actions into horizontal camera motion, once per frame.
///
/// Motion is a direct function of the current snapshot and the frame delta:
/// no velocity is carried between ticks.
#[derive(Debug, Clone)]
pub struct CameraMover<I> {
    input: I,
    config: MovementConfig,
}

impl<I: InputSource> CameraMover<I> {
    pub fn new(input: I, config: MovementConfig) -> Self {
        Self { input, config }
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// Advance the camera by one frame. Returns the displacement applied,
    /// `Vec3::ZERO` when the camera did not move.
    pub fn tick<C: CameraRig + ?Sized>(&self, camera: &mut C, delta: FrameDelta) -> Vec3 {
        let input = self.input.snapshot();

        let boost = if input.boost {
            self.config.boost_multiplier
        } else {
            1.0
        };
        let speed = self.config.base_speed * boost * delta.as_secs();

        let up = camera.up();
        let forward = horizontal(camera.forward(), up);
        let right = right_of(forward, up);

        let mut dir = Vec3::ZERO;
        if input.forward {
            dir += forward;
        }
        if input.backward {
            dir -= forward;
        }
        if input.left {
            dir -= right;
        }
        if input.right {
            dir += right;
        }

        if dir.length_squared() == 0.0 {
            return Vec3::ZERO;
        }

        let step = unit_or_zero(dir) * speed;
        if step != Vec3::ZERO {
            camera.translate(step);
            trace!("moved {:?} -> {:?}", step, camera.position());
        }
        step
    }
}
