use glam::Vec3;

/// Camera surface the movement controllers drive.
///
/// Controllers read orientation through `forward`/`up` and only ever write
/// the position; orientation belongs to whoever implements look control.
pub trait CameraRig {
    /// Camera position in world space
    fn position(&self) -> Vec3;

    /// Overwrite the camera position
    fn set_position(&mut self, position: Vec3);

    /// Current world-space view direction (unit length)
    fn forward(&self) -> Vec3;

    /// World up vector
    fn up(&self) -> Vec3 {
        Vec3::Y
    }

    /// Move the camera by `offset`
    fn translate(&mut self, offset: Vec3) {
        let position = self.position() + offset;
        self.set_position(position);
    }
}
