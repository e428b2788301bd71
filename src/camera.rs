use glam::Vec3;

use crate::traits::CameraRig;

/// Keeps yaw well-defined: at exactly +-90 degrees forward would be parallel to up
pub const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.001;

/// First-person camera: world position plus yaw/pitch orientation.
///
/// Movement controllers write `position`; `yaw` and `pitch` are written
/// only by look control (see [`crate::core::look::PointerLook`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Rotation about +Y in radians; 0 looks down +Z
    pub yaw: f32,
    /// Elevation in radians; positive looks up
    pub pitch: f32,
}

impl Camera {
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch,
        }
    }

    /// Camera at `position` oriented toward `target`
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        let mut camera = Self::new(position, 0.0, 0.0);
        camera.look_at(target);
        camera
    }

    /// Orient toward `target`. No-op when `target` is the camera position.
    pub fn look_at(&mut self, target: Vec3) {
        let dir = (target - self.position).normalize_or_zero();
        if dir == Vec3::ZERO {
            return;
        }
        self.yaw = dir.x.atan2(dir.z);
        self.pitch = dir.y.clamp(-1.0, 1.0).asin();
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }
}

impl Default for Camera {
    /// Reference pose: above and to the side of the origin, looking at it
    fn default() -> Self {
        Self::looking_at(Vec3::new(5.0, 3.0, 6.0), Vec3::ZERO)
    }
}

impl CameraRig for Camera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn forward(&self) -> Vec3 {
        Camera::forward(self)
    }
}
