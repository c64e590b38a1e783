//! Mouse button state

use serde::{Deserialize, Serialize};

/// Mouse button type for event handling and bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButtonType {
    /// Left mouse button (primary)
    Left,
    /// Right mouse button (secondary/context)
    Right,
    /// Middle mouse button (scroll wheel click)
    Middle,
}

/// Mouse button state flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MouseButtons {
    pub left: bool,
    pub right: bool,
    pub middle: bool,
}

impl MouseButtons {
    /// Create a new MouseButtons with all buttons released
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the held state of one button
    pub fn set(&mut self, button: MouseButtonType, pressed: bool) {
        match button {
            MouseButtonType::Left => self.left = pressed,
            MouseButtonType::Right => self.right = pressed,
            MouseButtonType::Middle => self.middle = pressed,
        }
    }

    /// Check if a button is held
    pub fn is_pressed(&self, button: MouseButtonType) -> bool {
        match button {
            MouseButtonType::Left => self.left,
            MouseButtonType::Right => self.right,
            MouseButtonType::Middle => self.middle,
        }
    }
}
