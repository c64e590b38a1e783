//! Gilrs-based gamepad backend

use crate::backend::DeviceBackend;
use crate::{DeviceEvent, DeviceState, GamepadAxis, GamepadButton};
use gilrs::{Axis, Button, EventType, GamepadId, Gilrs};

/// Gilrs-based backend driving the single gamepad slot of [`DeviceState`]
///
/// The first pad that connects is tracked; events from other pads are
/// ignored until it disconnects.
pub struct GilrsBackend {
    gilrs: Gilrs,
    active: Option<GamepadId>,
}

impl GilrsBackend {
    /// Create a new gilrs backend
    pub fn new() -> Result<Self, gilrs::Error> {
        let gilrs = Gilrs::new()?;
        let active = gilrs
            .gamepads()
            .find(|(_, gamepad)| gamepad.is_connected())
            .map(|(id, _)| id);

        tracing::info!(connected = active.is_some(), "Gilrs backend initialized");
        Ok(Self { gilrs, active })
    }

    fn translate(event: EventType) -> Option<DeviceEvent> {
        match event {
            EventType::ButtonPressed(button, _) => map_button(button).map(DeviceEvent::GamepadDown),
            EventType::ButtonReleased(button, _) => map_button(button).map(DeviceEvent::GamepadUp),
            EventType::AxisChanged(axis, value, _) => {
                map_axis(axis).map(|axis| DeviceEvent::GamepadAxis(axis, value))
            }
            EventType::Connected => Some(DeviceEvent::GamepadConnected),
            EventType::Disconnected => Some(DeviceEvent::GamepadDisconnected),
            _ => None,
        }
    }
}

impl DeviceBackend for GilrsBackend {
    fn poll(&mut self, state: &mut DeviceState) {
        if self.active.is_some() && !state.gamepad.connected {
            state.apply(DeviceEvent::GamepadConnected);
        }

        while let Some(event) = self.gilrs.next_event() {
            match (self.active, &event.event) {
                (None, EventType::Connected) => {
                    tracing::info!("Gamepad '{}' connected", self.gilrs.gamepad(event.id).name());
                    self.active = Some(event.id);
                }
                (Some(id), _) if id != event.id => continue,
                (None, _) => continue,
                _ => {}
            }

            if matches!(event.event, EventType::Disconnected) {
                tracing::info!("Gamepad disconnected");
                self.active = None;
            }

            if let Some(device_event) = Self::translate(event.event) {
                state.apply(device_event);
            }
        }
    }

    fn name(&self) -> &str {
        "gilrs"
    }
}

fn map_button(button: Button) -> Option<GamepadButton> {
    Some(match button {
        Button::South => GamepadButton::South,
        Button::East => GamepadButton::East,
        Button::West => GamepadButton::West,
        Button::North => GamepadButton::North,
        Button::LeftTrigger => GamepadButton::LeftShoulder,
        Button::RightTrigger => GamepadButton::RightShoulder,
        Button::LeftThumb => GamepadButton::LeftThumb,
        Button::RightThumb => GamepadButton::RightThumb,
        Button::Start => GamepadButton::Start,
        Button::Select => GamepadButton::Select,
        Button::DPadUp => GamepadButton::DPadUp,
        Button::DPadDown => GamepadButton::DPadDown,
        Button::DPadLeft => GamepadButton::DPadLeft,
        Button::DPadRight => GamepadButton::DPadRight,
        _ => return None,
    })
}

fn map_axis(axis: Axis) -> Option<GamepadAxis> {
    match axis {
        Axis::LeftStickX => Some(GamepadAxis::LeftStickX),
        Axis::LeftStickY => Some(GamepadAxis::LeftStickY),
        _ => None,
    }
}
