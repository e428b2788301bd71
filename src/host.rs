use glam::Vec3;
use log::{debug, error, info, warn};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, KeyEvent, MouseButton, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use crate::camera::Camera;
use crate::config::Config;
use crate::core::{
    Clock, CameraMover, FrameDelta, KeyBindings, KeyboardState, PointerLook,
    ScrollZoomController, Subscription, Throttled, WheelDelta, WheelEvents,
};
use crate::loaders::SceneInstance;

const INITIAL_WINDOW_WIDTH: u32 = 1280;
const INITIAL_WINDOW_HEIGHT: u32 = 720;
const STATUS_LOG_INTERVAL: f32 = 1.0;

/// Shared keyboard state: the event loop writes it, the mover reads it
pub type KeyboardHandle = Rc<RefCell<KeyboardState>>;

/// Owns the camera and everything that moves it.
///
/// Single-threaded by construction: frame ticks and wheel events arrive
/// on the event loop thread one after another, never concurrently.
pub struct SceneHost {
    camera: Camera,
    keyboard: KeyboardHandle,
    mover: CameraMover<KeyboardHandle>,
    wheel: WheelEvents<Camera>,
    zoom_subscription: Option<Subscription>,
    look: PointerLook,
    pixels_per_line: f32,
    scene: Option<SceneInstance>,
    status: Throttled,
}

impl SceneHost {
    pub fn new(config: &Config, scene: Option<SceneInstance>) -> Self {
        let keyboard: KeyboardHandle =
            Rc::new(RefCell::new(KeyboardState::new(KeyBindings::default())));
        let mover = CameraMover::new(Rc::clone(&keyboard), config.movement);

        let mut wheel = WheelEvents::new();
        let zoom = ScrollZoomController::new(config.zoom);
        let zoom_subscription = Some(wheel.subscribe(move |camera: &mut Camera, delta| {
            zoom.on_wheel(camera, delta);
        }));

        let camera = config.scene.initial_camera();
        info!(
            "Camera at {:?} facing {:?}",
            camera.position,
            camera.forward()
        );
        if let Some(bounds) = scene.as_ref().and_then(SceneInstance::world_bounds) {
            info!("Scene bounds {:?} .. {:?}", bounds.min, bounds.max);
        }

        Self {
            camera,
            keyboard,
            mover,
            wheel,
            zoom_subscription,
            look: PointerLook::new(config.look),
            pixels_per_line: config.zoom.pixels_per_line,
            scene,
            status: Throttled::new(STATUS_LOG_INTERVAL),
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn keyboard(&self) -> &KeyboardHandle {
        &self.keyboard
    }

    pub fn look(&self) -> &PointerLook {
        &self.look
    }

    pub fn scene(&self) -> Option<&SceneInstance> {
        self.scene.as_ref()
    }

    /// Run one frame of movement
    pub fn frame(&mut self, delta: FrameDelta) -> Vec3 {
        let step = self.mover.tick(&mut self.camera, delta);
        if self.status.try_tick(delta) {
            debug!("camera {:?}", self.camera.position);
        }
        step
    }

    /// Forward one wheel event to subscribers
    pub fn scroll(&mut self, delta: WheelDelta) {
        self.wheel.dispatch(&mut self.camera, delta);
    }

    pub fn mouse_motion(&mut self, dx: f64, dy: f64) {
        self.look.on_mouse_motion(&mut self.camera, dx, dy);
    }

    pub fn set_pointer_locked(&mut self, locked: bool) {
        self.look.set_locked(locked);
    }

    /// Whether the zoom handler is still registered
    pub fn is_zoom_subscribed(&self) -> bool {
        self.zoom_subscription.is_some()
    }

    /// Drop the wheel subscription. Safe to call more than once.
    pub fn teardown(&mut self) {
        if let Some(id) = self.zoom_subscription.take() {
            self.wheel.unsubscribe(id);
            info!("Scene torn down, camera at {:?}", self.camera.position);
        }
    }

    fn process_window_event(&mut self, event: &WindowEvent) {
        self.keyboard.borrow_mut().process_event(event);
        if let WindowEvent::MouseWheel { delta, .. } = event {
            self.scroll(WheelDelta::from_winit(delta, self.pixels_per_line));
        }
    }
}

impl Drop for SceneHost {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// winit driver around [`SceneHost`]
pub struct App {
    window: Option<Arc<Window>>,
    title: String,
    host: SceneHost,
    clock: Clock,
}

impl App {
    pub fn new(host: SceneHost, title: impl Into<String>) -> Self {
        Self {
            window: None,
            title: title.into(),
            host,
            clock: Clock::new(),
        }
    }

    pub fn host(&self) -> &SceneHost {
        &self.host
    }

    fn grab_pointer(&mut self, grab: bool) {
        let Some(window) = &self.window else {
            return;
        };

        let result = if grab {
            window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
        } else {
            window.set_cursor_grab(CursorGrabMode::None)
        };

        match result {
            Ok(()) => {
                window.set_cursor_visible(!grab);
                self.host.set_pointer_locked(grab);
            }
            Err(e) => warn!("Cursor grab failed: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match event_loop.create_window(
            Window::default_attributes()
                .with_title(self.title.clone())
                .with_inner_size(winit::dpi::LogicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                )),
        ) {
            Ok(w) => {
                self.window = Some(Arc::new(w));
                self.clock.reset();
            }
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.host.process_window_event(&event);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => self.grab_pointer(false),
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.grab_pointer(true),
            WindowEvent::Focused(false) => self.grab_pointer(false),
            WindowEvent::Focused(true) => self.clock.reset(),
            WindowEvent::RedrawRequested => {
                let delta = self.clock.tick();
                self.host.frame(delta);
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.host.mouse_motion(dx, dy);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.host.teardown();
    }
}
