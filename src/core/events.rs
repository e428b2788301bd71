use log::debug;

use super::zoom::WheelDelta;

/// Handle returned by [`WheelEvents::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type WheelHandler<C> = Box<dyn FnMut(&mut C, WheelDelta)>;

/// Wheel event fan-out owned by the host.
///
/// Handlers are passive: they observe each event and cannot cancel it.
/// `C` is whatever context the host lends handlers, typically the camera.
pub struct WheelEvents<C> {
    next_id: u64,
    handlers: Vec<(Subscription, WheelHandler<C>)>,
}

impl<C> WheelEvents<C> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            handlers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, handler: impl FnMut(&mut C, WheelDelta) + 'static) -> Subscription {
        let id = Subscription(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        debug!("wheel handler {:?} registered", id);
        id
    }

    /// Remove a handler. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: Subscription) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(h, _)| *h != id);
        let removed = self.handlers.len() != before;
        if removed {
            debug!("wheel handler {:?} removed", id);
        }
        removed
    }

    /// Deliver one event to every handler in registration order
    pub fn dispatch(&mut self, ctx: &mut C, delta: WheelDelta) {
        for (_, handler) in &mut self.handlers {
            handler(ctx, delta);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<C> Default for WheelEvents<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> std::fmt::Debug for WheelEvents<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WheelEvents")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
