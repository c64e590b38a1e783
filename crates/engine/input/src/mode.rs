//! Input control modes
//!
//! A mode selects which action map is live. Exactly one mode is active at a
//! time; [`InputControlMode::None`] disables every map.

use crate::action::ActionMap;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputControlMode {
    /// All action maps disabled
    #[default]
    None,
    /// Only the gameplay map is enabled
    Gameplay,
    /// Only the UI map is enabled
    Ui,
}

impl InputControlMode {
    /// The map this mode enables, if any
    pub fn enabled_map(self) -> Option<ActionMap> {
        match self {
            InputControlMode::None => None,
            InputControlMode::Gameplay => Some(ActionMap::Gameplay),
            InputControlMode::Ui => Some(ActionMap::Ui),
        }
    }
}

impl fmt::Display for InputControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputControlMode::None => "none",
            InputControlMode::Gameplay => "gameplay",
            InputControlMode::Ui => "ui",
        };
        f.write_str(name)
    }
}

impl FromStr for InputControlMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(InputControlMode::None),
            "gameplay" => Ok(InputControlMode::Gameplay),
            "ui" => Ok(InputControlMode::Ui),
            other => Err(crate::Error::UnknownMode(other.to_string())),
        }
    }
}

/// Read-only view of the reader's active mode
///
/// Cloned handles observe every later mode change, which lets event
/// subscribers check the mode from inside their callbacks.
#[derive(Debug, Clone)]
pub struct ModeWatch(Rc<Cell<InputControlMode>>);

impl ModeWatch {
    pub(crate) fn new(cell: Rc<Cell<InputControlMode>>) -> Self {
        Self(cell)
    }

    /// Currently active mode
    pub fn get(&self) -> InputControlMode {
        self.0.get()
    }
}
