pub mod bindings;
pub mod clock;
pub mod events;
pub mod frame;
pub mod input;
pub mod look;
pub mod mover;
pub mod timer;
pub mod zoom;

pub use bindings::{KeyBindings, KeyboardState};
pub use clock::Clock;
pub use events::{Subscription, WheelEvents};
pub use frame::{FrameDelta, FrameInfo};
pub use input::{Action, InputSnapshot};
pub use look::{LookConfig, PointerLook};
pub use mover::{CameraMover, MovementConfig};
pub use timer::Throttled;
pub use zoom::{ScrollZoomController, WheelDelta, ZoomConfig};
