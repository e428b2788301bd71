use std::cell::RefCell;
use std::rc::Rc;

use crate::core::input::InputSnapshot;

/// Source of per-frame action state.
///
/// `snapshot` is a pure read: every call samples the current state afresh
/// and an action with no pressed key reads as `false`.
pub trait InputSource {
    fn snapshot(&self) -> InputSnapshot;
}

impl<T: InputSource + ?Sized> InputSource for &T {
    fn snapshot(&self) -> InputSnapshot {
        (**self).snapshot()
    }
}

impl<T: InputSource + ?Sized> InputSource for Rc<T> {
    fn snapshot(&self) -> InputSnapshot {
        (**self).snapshot()
    }
}

/// Shared handle: the host writes key state, the mover reads it
impl<T: InputSource> InputSource for RefCell<T> {
    fn snapshot(&self) -> InputSnapshot {
        self.borrow().snapshot()
    }
}

impl InputSource for InputSnapshot {
    fn snapshot(&self) -> InputSnapshot {
        *self
    }
}
