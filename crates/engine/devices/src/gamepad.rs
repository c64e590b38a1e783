//! Gamepad state with deadzone processing
//!
//! Sticks are stored both raw and deadzone-filtered. Bindings read the
//! filtered value so small stick drift never produces movement.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default deadzone value for analog sticks
pub const DEFAULT_DEADZONE: f32 = 0.15;

/// Upper bound accepted for a deadzone; anything larger leaves no usable range
pub const MAX_DEADZONE: f32 = 0.9;

/// Analog stick axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamepadAxis {
    LeftStickX,
    LeftStickY,
}

/// Digital gamepad buttons, named by position rather than by vendor label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamepadButton {
    /// Bottom face button (A / Cross)
    South,
    /// Right face button (B / Circle)
    East,
    /// Left face button (X / Square)
    West,
    /// Top face button (Y / Triangle)
    North,
    LeftShoulder,
    RightShoulder,
    /// Left stick click
    LeftThumb,
    /// Right stick click
    RightThumb,
    Start,
    Select,
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
}

/// Gamepad state tracker
#[derive(Debug, Clone)]
pub struct GamepadState {
    /// Left stick (movement), deadzone applied
    pub left_stick: Vec2,
    raw_left_stick: Vec2,
    buttons: HashSet<GamepadButton>,
    /// Whether the gamepad is connected
    pub connected: bool,
    deadzone: f32,
}

impl Default for GamepadState {
    fn default() -> Self {
        Self {
            left_stick: Vec2::ZERO,
            raw_left_stick: Vec2::ZERO,
            buttons: HashSet::new(),
            connected: false,
            deadzone: DEFAULT_DEADZONE,
        }
    }
}

impl GamepadState {
    /// Create a new GamepadState with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new GamepadState with custom deadzone
    pub fn with_deadzone(deadzone: f32) -> Self {
        Self {
            deadzone: deadzone.clamp(0.0, MAX_DEADZONE),
            ..Self::default()
        }
    }

    /// Get the current deadzone value
    pub fn deadzone(&self) -> f32 {
        self.deadzone
    }

    /// Update one stick axis with a raw value in [-1, 1]
    pub fn set_axis(&mut self, axis: GamepadAxis, value: f32) {
        let value = value.clamp(-1.0, 1.0);
        match axis {
            GamepadAxis::LeftStickX => self.raw_left_stick.x = value,
            GamepadAxis::LeftStickY => self.raw_left_stick.y = value,
        }
        self.left_stick = apply_radial_deadzone(self.raw_left_stick, self.deadzone);
    }

    /// Record a button press
    pub fn press(&mut self, button: GamepadButton) {
        self.buttons.insert(button);
    }

    /// Record a button release
    pub fn release(&mut self, button: GamepadButton) {
        self.buttons.remove(&button);
    }

    /// Check if a button is held
    pub fn is_pressed(&self, button: GamepadButton) -> bool {
        self.buttons.contains(&button)
    }

    /// Mark the pad as connected
    pub fn connect(&mut self) {
        self.connected = true;
    }

    /// Mark the pad as disconnected and drop every held input
    pub fn disconnect(&mut self) {
        self.connected = false;
        self.reset();
    }

    /// Reset all inputs to default state, keeping the deadzone
    fn reset(&mut self) {
        self.left_stick = Vec2::ZERO;
        self.raw_left_stick = Vec2::ZERO;
        self.buttons.clear();
    }
}

/// Apply radial deadzone to an analog stick input
///
/// Output magnitude is rescaled so the usable range still spans 0..1.
fn apply_radial_deadzone(raw: Vec2, deadzone: f32) -> Vec2 {
    let magnitude = raw.length();

    if magnitude < deadzone || magnitude == 0.0 {
        Vec2::ZERO
    } else {
        let adjusted = ((magnitude - deadzone) / (1.0 - deadzone)).clamp(0.0, 1.0);
        raw / magnitude * adjusted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamepad_state_default() {
        let state = GamepadState::default();
        assert!(!state.connected);
        assert_eq!(state.left_stick, Vec2::ZERO);
        assert_eq!(state.deadzone(), DEFAULT_DEADZONE);
    }

    #[test]
    fn test_deadzone_filters_drift() {
        let mut state = GamepadState::new();

        state.set_axis(GamepadAxis::LeftStickX, 0.1);
        state.set_axis(GamepadAxis::LeftStickY, 0.1);
        assert_eq!(state.left_stick, Vec2::ZERO);

        state.set_axis(GamepadAxis::LeftStickX, 0.8);
        state.set_axis(GamepadAxis::LeftStickY, 0.0);
        assert!(state.left_stick.x > 0.0);
        assert_eq!(state.left_stick.y, 0.0);
    }

    #[test]
    fn test_full_deflection_stays_unit() {
        let mut state = GamepadState::new();
        state.set_axis(GamepadAxis::LeftStickY, 1.0);
        assert!((state.left_stick.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_deadzone_passes_raw() {
        let mut state = GamepadState::with_deadzone(0.0);
        state.set_axis(GamepadAxis::LeftStickX, 0.05);
        assert!((state.left_stick.x - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_deadzone_clamped() {
        let state = GamepadState::with_deadzone(2.0);
        assert_eq!(state.deadzone(), MAX_DEADZONE);
    }

    #[test]
    fn test_buttons_and_disconnect() {
        let mut state = GamepadState::new();
        state.connect();
        state.press(GamepadButton::South);
        state.set_axis(GamepadAxis::LeftStickX, 0.9);
        assert!(state.is_pressed(GamepadButton::South));

        state.disconnect();
        assert!(!state.connected);
        assert!(!state.is_pressed(GamepadButton::South));
        assert_eq!(state.left_stick, Vec2::ZERO);
    }
}
