//! Device backend trait for platform-specific event sources
//!
//! A backend drains whatever native events arrived since the previous frame
//! and applies them to a [`DeviceState`].

use crate::{DeviceEvent, DeviceState};
use std::collections::VecDeque;

/// Trait for device backends (e.g., gilrs, winit, a scripted timeline)
///
/// # Example
///
/// ```ignore
/// let mut backend = devices::create_device_backend();
/// let mut state = DeviceState::new();
///
/// // In your game loop:
/// backend.poll(&mut state);
/// controls.update(&state);
/// ```
pub trait DeviceBackend {
    /// Apply pending native events to `state`
    ///
    /// Should be called once per frame, before the binding layer reads the
    /// state.
    fn poll(&mut self, state: &mut DeviceState);

    /// Human-readable backend name for logging
    fn name(&self) -> &str;
}

/// A no-op backend for platforms without device support
pub struct NullBackend;

impl NullBackend {
    /// Create a new null backend
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceBackend for NullBackend {
    fn poll(&mut self, _state: &mut DeviceState) {}

    fn name(&self) -> &str {
        "null"
    }
}

/// Backend that replays a fixed timeline of events
///
/// Each entry is `(frame, event)`. Every call to [`DeviceBackend::poll`]
/// advances one frame and applies the events scheduled for it. Entries must
/// be sorted by frame.
#[derive(Debug, Clone, Default)]
pub struct ScriptedBackend {
    frame: u64,
    pending: VecDeque<(u64, DeviceEvent)>,
}

impl ScriptedBackend {
    /// Create a backend from a frame-ordered timeline
    pub fn new(timeline: impl IntoIterator<Item = (u64, DeviceEvent)>) -> Self {
        Self {
            frame: 0,
            pending: timeline.into_iter().collect(),
        }
    }

    /// Frame the next poll will apply
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Whether every scheduled event has been applied
    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }
}

impl DeviceBackend for ScriptedBackend {
    fn poll(&mut self, state: &mut DeviceState) {
        while let Some((frame, event)) = self.pending.front().copied() {
            if frame > self.frame {
                break;
            }
            self.pending.pop_front();
            tracing::trace!(frame, ?event, "scripted device event");
            state.apply(event);
        }
        self.frame += 1;
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
