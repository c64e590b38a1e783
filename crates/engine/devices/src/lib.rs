//! Input device state for the gameplay input reader
//!
//! This crate holds platform-agnostic snapshots of the physical devices
//! (keyboard, mouse, one gamepad). Platform backends translate native events
//! into [`DeviceEvent`]s; the binding layer reads the resulting
//! [`DeviceState`] once per frame.
//!
//! # Modules
//!
//! - [`keyboard`]: Key codes and held-key tracking
//! - [`mouse`]: Mouse button state
//! - [`gamepad`]: Gamepad sticks and buttons with deadzone processing
//! - [`backend`]: Backend trait for platform-specific event sources
//!
//! # Feature Flags
//!
//! - `gilrs`: Enable gilrs-based gamepad backend (native only)

pub mod backend;
pub mod gamepad;
pub mod keyboard;
pub mod mouse;

pub use backend::{DeviceBackend, NullBackend, ScriptedBackend};
pub use gamepad::{GamepadAxis, GamepadButton, GamepadState};
pub use keyboard::{Key, KeyboardState};
pub use mouse::{MouseButtonType, MouseButtons};

#[cfg(feature = "gilrs")]
mod gilrs_backend;

#[cfg(feature = "gilrs")]
pub use gilrs_backend::GilrsBackend;

/// A single raw input change reported by a platform backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeviceEvent {
    KeyDown(Key),
    KeyUp(Key),
    MouseDown(MouseButtonType),
    MouseUp(MouseButtonType),
    GamepadAxis(GamepadAxis, f32),
    GamepadDown(GamepadButton),
    GamepadUp(GamepadButton),
    GamepadConnected,
    GamepadDisconnected,
}

/// Combined state of every device the game reads from
#[derive(Debug, Clone, Default)]
pub struct DeviceState {
    pub keyboard: KeyboardState,
    pub mouse: MouseButtons,
    pub gamepad: GamepadState,
}

impl DeviceState {
    /// Create an idle device state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a device state whose gamepad uses the given stick deadzone
    pub fn with_deadzone(deadzone: f32) -> Self {
        Self {
            gamepad: GamepadState::with_deadzone(deadzone),
            ..Self::default()
        }
    }

    /// Apply one raw event
    pub fn apply(&mut self, event: DeviceEvent) {
        match event {
            DeviceEvent::KeyDown(key) => self.keyboard.press(key),
            DeviceEvent::KeyUp(key) => self.keyboard.release(key),
            DeviceEvent::MouseDown(button) => self.mouse.set(button, true),
            DeviceEvent::MouseUp(button) => self.mouse.set(button, false),
            DeviceEvent::GamepadAxis(axis, value) => self.gamepad.set_axis(axis, value),
            DeviceEvent::GamepadDown(button) => self.gamepad.press(button),
            DeviceEvent::GamepadUp(button) => self.gamepad.release(button),
            DeviceEvent::GamepadConnected => self.gamepad.connect(),
            DeviceEvent::GamepadDisconnected => self.gamepad.disconnect(),
        }
    }

    /// Apply a batch of events in order
    pub fn apply_all(&mut self, events: impl IntoIterator<Item = DeviceEvent>) {
        for event in events {
            self.apply(event);
        }
    }
}

/// Create the default device backend based on enabled features
#[cfg(feature = "gilrs")]
pub fn create_device_backend() -> Box<dyn DeviceBackend> {
    match GilrsBackend::new() {
        Ok(backend) => Box::new(backend),
        Err(e) => {
            tracing::warn!("Failed to initialize gilrs backend: {}", e);
            Box::new(NullBackend::new())
        }
    }
}

/// Create the default device backend (a no-op when no backend is compiled in)
#[cfg(not(feature = "gilrs"))]
pub fn create_device_backend() -> Box<dyn DeviceBackend> {
    Box::new(NullBackend::new())
}
