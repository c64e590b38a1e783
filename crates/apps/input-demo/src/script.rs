//! Built-in device timeline used when no live backend is requested

use devices::{
    DeviceEvent, GamepadAxis, GamepadButton, Key, MouseButtonType, ScriptedBackend,
};

/// A short play session: walk, sprint, jump, scan, pause and resume, then
/// strafe with the gamepad stick
pub fn demo_timeline() -> Vec<(u64, DeviceEvent)> {
    vec![
        // Walk forward, then sprint
        (2, DeviceEvent::KeyDown(Key::W)),
        (6, DeviceEvent::KeyDown(Key::ShiftLeft)),
        (10, DeviceEvent::KeyUp(Key::ShiftLeft)),
        (12, DeviceEvent::KeyUp(Key::W)),
        // Hold jump for three frames
        (14, DeviceEvent::KeyDown(Key::Space)),
        (17, DeviceEvent::KeyUp(Key::Space)),
        // Scan with the mouse
        (20, DeviceEvent::MouseDown(MouseButtonType::Right)),
        (24, DeviceEvent::MouseUp(MouseButtonType::Right)),
        // Pause; movement while paused must be ignored
        (26, DeviceEvent::KeyDown(Key::Escape)),
        (27, DeviceEvent::KeyUp(Key::Escape)),
        (28, DeviceEvent::KeyDown(Key::D)),
        (30, DeviceEvent::KeyUp(Key::D)),
        // Resume from the gamepad
        (32, DeviceEvent::GamepadConnected),
        (33, DeviceEvent::GamepadDown(GamepadButton::Start)),
        (34, DeviceEvent::GamepadUp(GamepadButton::Start)),
        // Strafe left with the stick
        (36, DeviceEvent::GamepadAxis(GamepadAxis::LeftStickX, -1.0)),
        (40, DeviceEvent::GamepadAxis(GamepadAxis::LeftStickX, 0.0)),
    ]
}

pub fn demo_backend() -> ScriptedBackend {
    ScriptedBackend::new(demo_timeline())
}
