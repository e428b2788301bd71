use backdrop::core::{Action, CameraMover, FrameDelta, InputSnapshot, MovementConfig};
use backdrop::traits::{CameraRig, InputSource};
use backdrop::Camera;
use glam::Vec3;
use std::cell::Cell;

const EPS: f32 = 1e-5;

/// Mock input whose state the test flips between frames
struct MockInput {
    state: Cell<InputSnapshot>,
    reads: Cell<usize>,
}

impl MockInput {
    fn new() -> Self {
        Self {
            state: Cell::new(InputSnapshot::default()),
            reads: Cell::new(0),
        }
    }

    fn hold(&self, actions: &[Action]) {
        self.state.set(InputSnapshot::with(actions));
    }
}

impl InputSource for MockInput {
    fn snapshot(&self) -> InputSnapshot {
        self.reads.set(self.reads.get() + 1);
        self.state.get()
    }
}

fn mover_holding(actions: &[Action]) -> CameraMover<InputSnapshot> {
    CameraMover::new(InputSnapshot::with(actions), MovementConfig::default())
}

fn reference_camera() -> Camera {
    Camera::looking_at(Vec3::new(5.0, 3.0, 6.0), Vec3::ZERO)
}

fn horizontal_look(camera: &Camera) -> Vec3 {
    let f = camera.forward();
    Vec3::new(f.x, 0.0, f.z).normalize()
}

// ============================================================================
// Frame delta
// ============================================================================

#[test]
fn test_zero_delta_never_moves() {
    let all = [
        Action::Forward,
        Action::Backward,
        Action::Left,
        Action::Right,
        Action::Boost,
    ];
    for n in 0..all.len() {
        let mut camera = reference_camera();
        let before = camera.position;
        let step = mover_holding(&all[..=n]).tick(&mut camera, FrameDelta::ZERO);
        assert_eq!(step, Vec3::ZERO);
        assert_eq!(camera.position, before);
    }
}

#[test]
fn test_negative_delta_treated_as_zero() {
    let mut camera = reference_camera();
    let before = camera.position;
    mover_holding(&[Action::Forward]).tick(&mut camera, FrameDelta::from_secs(-1.0));
    assert_eq!(camera.position, before);
}

// ============================================================================
// Speed and direction
// ============================================================================

#[test]
fn test_forward_magnitude_without_boost() {
    let mut camera = reference_camera();
    let dt = 0.25;
    let step = mover_holding(&[Action::Forward]).tick(&mut camera, FrameDelta::from_secs(dt));
    assert!((step.length() - 8.0 * dt).abs() < EPS);
}

#[test]
fn test_forward_magnitude_with_boost() {
    let mut camera = reference_camera();
    let dt = 0.25;
    let step = mover_holding(&[Action::Forward, Action::Boost])
        .tick(&mut camera, FrameDelta::from_secs(dt));
    assert!((step.length() - 8.0 * 3.0 * dt).abs() < EPS);
}

#[test]
fn test_custom_speeds() {
    let config = MovementConfig {
        base_speed: 2.0,
        boost_multiplier: 5.0,
    };
    let mover = CameraMover::new(InputSnapshot::with(&[Action::Backward, Action::Boost]), config);
    let mut camera = reference_camera();
    let step = mover.tick(&mut camera, FrameDelta::from_secs(1.0));
    assert!((step.length() - 10.0).abs() < EPS);
}

#[test]
fn test_reference_scenario_one_frame_at_60hz() {
    let mut camera = reference_camera();
    let start = camera.position;

    mover_holding(&[Action::Forward]).tick(&mut camera, FrameDelta::from_secs(1.0 / 60.0));

    let moved = camera.position - start;
    assert!((moved.length() - 8.0 / 60.0).abs() < EPS);
    assert!((moved.normalize() - horizontal_look(&camera)).length() < EPS);
    assert_eq!(moved.y, 0.0);
}

#[test]
fn test_backward_is_opposite_forward() {
    let mut a = reference_camera();
    let mut b = reference_camera();
    let dt = FrameDelta::from_secs(0.1);

    let fwd = mover_holding(&[Action::Forward]).tick(&mut a, dt);
    let back = mover_holding(&[Action::Backward]).tick(&mut b, dt);
    assert!((fwd + back).length() < EPS);
}

#[test]
fn test_strafe_is_horizontal_and_perpendicular() {
    let mut camera = reference_camera();
    let step = mover_holding(&[Action::Right]).tick(&mut camera, FrameDelta::from_secs(1.0));

    assert!((step.length() - 8.0).abs() < EPS);
    assert!(step.y.abs() < EPS);
    assert!(step.dot(horizontal_look(&camera)).abs() < EPS);
}

// ============================================================================
// Combined input
// ============================================================================

#[test]
fn test_forward_and_backward_cancel() {
    let mut camera = reference_camera();
    let before = camera.position;
    let step = mover_holding(&[Action::Forward, Action::Backward, Action::Boost])
        .tick(&mut camera, FrameDelta::from_secs(0.5));
    assert_eq!(step, Vec3::ZERO);
    assert_eq!(camera.position, before);
}

#[test]
fn test_left_and_right_cancel() {
    let mut camera = reference_camera();
    let before = camera.position;
    mover_holding(&[Action::Left, Action::Right]).tick(&mut camera, FrameDelta::from_secs(0.5));
    assert_eq!(camera.position, before);
}

#[test]
fn test_diagonal_is_normalized() {
    let mut camera = reference_camera();
    let dt = 0.5;
    let step = mover_holding(&[Action::Forward, Action::Left])
        .tick(&mut camera, FrameDelta::from_secs(dt));

    assert!((step.length() - 8.0 * dt).abs() < EPS);
    // Halfway between forward and strafe
    let look = horizontal_look(&camera);
    assert!((step.normalize().dot(look) - std::f32::consts::FRAC_1_SQRT_2).abs() < EPS);
}

#[test]
fn test_all_four_directions_cancel() {
    let mut camera = reference_camera();
    let before = camera.position;
    mover_holding(&[Action::Forward, Action::Backward, Action::Left, Action::Right])
        .tick(&mut camera, FrameDelta::from_secs(1.0));
    assert_eq!(camera.position, before);
}

// ============================================================================
// Input sampling
// ============================================================================

#[test]
fn test_input_resampled_every_tick() {
    let input = MockInput::new();
    let mover = CameraMover::new(&input, MovementConfig::default());
    let mut camera = Camera::new(Vec3::ZERO, 0.0, 0.0);
    let dt = FrameDelta::from_secs(0.5);

    mover.tick(&mut camera, dt);
    assert_eq!(camera.position, Vec3::ZERO);

    input.hold(&[Action::Forward]);
    mover.tick(&mut camera, dt);
    assert!((camera.position - Vec3::new(0.0, 0.0, 4.0)).length() < EPS);

    input.hold(&[]);
    mover.tick(&mut camera, dt);
    assert!((camera.position - Vec3::new(0.0, 0.0, 4.0)).length() < EPS);

    assert_eq!(input.reads.get(), 3);
}

#[test]
fn test_alternating_input_returns_to_start() {
    let input = MockInput::new();
    let mover = CameraMover::new(&input, MovementConfig::default());
    let mut camera = Camera::new(Vec3::ZERO, 0.0, 0.0);
    let dt = FrameDelta::from_secs(0.125);

    for frame in 0..10 {
        let action = if frame % 2 == 0 {
            Action::Forward
        } else {
            Action::Backward
        };
        input.hold(&[action]);
        mover.tick(&mut camera, dt);
    }

    assert_eq!(camera.position, Vec3::ZERO);
}

#[test]
fn test_orientation_untouched() {
    let mut camera = reference_camera();
    let (yaw, pitch) = (camera.yaw, camera.pitch);
    mover_holding(&[Action::Forward, Action::Right, Action::Boost])
        .tick(&mut camera, FrameDelta::from_secs(1.0));
    assert_eq!((camera.yaw, camera.pitch), (yaw, pitch));
}

// ============================================================================
// Degenerate orientation
// ============================================================================

/// Camera rig whose forward is exactly parallel to up
struct StraightDown {
    position: Vec3,
}

impl CameraRig for StraightDown {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn forward(&self) -> Vec3 {
        Vec3::NEG_Y
    }
}

#[test]
fn test_forward_parallel_to_up_does_not_move() {
    let mut rig = StraightDown { position: Vec3::ONE };
    let step = mover_holding(&[Action::Forward, Action::Left])
        .tick(&mut rig, FrameDelta::from_secs(1.0));
    assert_eq!(step, Vec3::ZERO);
    assert_eq!(rig.position, Vec3::ONE);
}
