use serde::{Deserialize, Serialize};
use std::fmt;

/// Named movement actions. The names are part of the binding contract and
/// are matched case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Forward,
    Backward,
    Left,
    Right,
    Boost,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Forward,
        Action::Backward,
        Action::Left,
        Action::Right,
        Action::Boost,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Action::Forward => "forward",
            Action::Backward => "backward",
            Action::Left => "left",
            Action::Right => "right",
            Action::Boost => "boost",
        }
    }

    pub fn from_name(name: &str) -> Option<Action> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Held state of every action for one frame. Sampled, used, dropped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputSnapshot {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub boost: bool,
}

impl InputSnapshot {
    /// Snapshot with exactly the given actions held
    pub fn with(actions: &[Action]) -> Self {
        let mut snap = Self::default();
        for &action in actions {
            snap.set(action, true);
        }
        snap
    }

    pub fn is_held(&self, action: Action) -> bool {
        match action {
            Action::Forward => self.forward,
            Action::Backward => self.backward,
            Action::Left => self.left,
            Action::Right => self.right,
            Action::Boost => self.boost,
        }
    }

    pub fn set(&mut self, action: Action, held: bool) {
        let slot = match action {
            Action::Forward => &mut self.forward,
            Action::Backward => &mut self.backward,
            Action::Left => &mut self.left,
            Action::Right => &mut self.right,
            Action::Boost => &mut self.boost,
        };
        *slot = held;
    }

    /// True when any of the four directional actions is held
    pub fn any_direction(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}
