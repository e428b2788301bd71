use std::collections::{HashMap, HashSet};
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::input::{Action, InputSnapshot};
use crate::traits::InputSource;

/// Physical key to action table. Several keys may drive one action.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: HashMap<KeyCode, Action>,
}

impl KeyBindings {
    /// Table with no bindings
    pub fn empty() -> Self {
        Self { map: HashMap::new() }
    }

    /// Bind `key` to `action`, replacing any previous binding of that key
    pub fn bind(&mut self, key: KeyCode, action: Action) -> &mut Self {
        self.map.insert(key, action);
        self
    }

    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        self.map.get(&key).copied()
    }

    /// All keys bound to `action`
    pub fn keys_for(&self, action: Action) -> Vec<KeyCode> {
        self.map
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| *k)
            .collect()
    }
}

impl Default for KeyBindings {
    /// Arrows and WASD for direction, either Shift for boost
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings
            .bind(KeyCode::ArrowUp, Action::Forward)
            .bind(KeyCode::KeyW, Action::Forward)
            .bind(KeyCode::ArrowDown, Action::Backward)
            .bind(KeyCode::KeyS, Action::Backward)
            .bind(KeyCode::ArrowLeft, Action::Left)
            .bind(KeyCode::KeyA, Action::Left)
            .bind(KeyCode::ArrowRight, Action::Right)
            .bind(KeyCode::KeyD, Action::Right)
            .bind(KeyCode::ShiftLeft, Action::Boost)
            .bind(KeyCode::ShiftRight, Action::Boost);
        bindings
    }
}

/// Adapter that bridges winit keyboard events to `InputSource`
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    bindings: KeyBindings,
    /// Currently pressed bound keys
    pressed: HashSet<KeyCode>,
}

impl KeyboardState {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            pressed: HashSet::new(),
        }
    }

    /// Process a winit `WindowEvent` and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    match event.state {
                        ElementState::Pressed => self.press(code),
                        ElementState::Released => self.release(code),
                    }
                }
            }
            // Key-up events are not delivered while unfocused
            WindowEvent::Focused(false) => self.clear(),
            _ => {}
        }
    }

    pub fn press(&mut self, code: KeyCode) {
        if self.bindings.action_for(code).is_some() {
            self.pressed.insert(code);
        }
    }

    pub fn release(&mut self, code: KeyCode) {
        self.pressed.remove(&code);
    }

    pub fn clear(&mut self) {
        self.pressed.clear();
    }

    pub fn is_key_down(&self, code: KeyCode) -> bool {
        self.pressed.contains(&code)
    }
}

impl InputSource for KeyboardState {
    fn snapshot(&self) -> InputSnapshot {
        let mut snap = InputSnapshot::default();
        for &code in &self.pressed {
            if let Some(action) = self.bindings.action_for(code) {
                snap.set(action, true);
            }
        }
        snap
    }
}
