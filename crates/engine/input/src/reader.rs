//! The input reader: turns bindings into gameplay events
//!
//! Two entry points are driven by the host on the simulation thread:
//! [`InputReader::tick`] once per fixed step, and [`InputReader::pump`] (or
//! [`InputReader::handle_edge`]) whenever the binding layer has detected
//! discrete edges.
//!
//! The bindings are owned by the reader and only reachable read-only, so
//! the enabled maps always agree with [`ModeSwitch::mode`].

use crate::action::{Action, ActionEdge, ActionMap, ActionPhase};
use crate::bindings::InputBindings;
use crate::capabilities::{
    EventSource, JumpSource, ModeSwitch, MoveSource, PauseSource, ScanSource,
};
use crate::controls::InputControls;
use crate::events::{EventBus, InputEvent, InputEventKind, SubscriptionId};
use crate::mode::{InputControlMode, ModeWatch};
use devices::DeviceState;
use glam::Vec3;
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, trace, warn};

/// Adapter from an [`InputBindings`] object to gameplay events
///
/// Owned by the composition root: construct it once at start-up and call
/// [`dispose`](Self::dispose) (or drop it) at shutdown. The reader starts in
/// [`InputControlMode::None`].
pub struct InputReader<B: InputBindings> {
    bindings: B,
    is_sprinting: bool,
    mode: Rc<Cell<InputControlMode>>,
    events: EventBus,
    disposed: bool,
}

impl<B: InputBindings> InputReader<B> {
    pub fn new(mut bindings: B) -> Self {
        bindings.disable_all();
        // Nothing is subscribed yet, so cancellations from the reset are stale.
        while bindings.next_edge().is_some() {}

        Self {
            bindings,
            is_sprinting: false,
            mode: Rc::new(Cell::new(InputControlMode::None)),
            events: EventBus::new(),
            disposed: false,
        }
    }

    /// Sample continuous actions; call once per fixed simulation step
    ///
    /// Emits at most one of move / sprint-move, then a jump if the jump
    /// control is held. Jump repeats on every tick it stays held.
    pub fn tick(&mut self) {
        if self.disposed {
            return;
        }
        self.read_move();
        self.read_jump();
    }

    fn read_move(&mut self) {
        let input = self.bindings.read_axis(Action::Move);
        let velocity = Vec3::new(input.x, 0.0, input.y);
        if velocity.x == 0.0 && velocity.z == 0.0 {
            return;
        }

        if self.is_sprinting {
            self.events.emit(InputEvent::SprintMove(velocity));
        } else {
            self.events.emit(InputEvent::Move(velocity));
        }
    }

    fn read_jump(&mut self) {
        if self.bindings.is_pressed(Action::Jump) {
            self.events.emit(InputEvent::Jump);
        }
    }

    /// Handle every edge the bindings have queued, oldest first
    ///
    /// Edges are pulled one at a time, so a pause that switches maps
    /// affects the edges queued behind it, and the cancellations it causes
    /// are handled in the same call.
    pub fn pump(&mut self) {
        while let Some(edge) = self.bindings.next_edge() {
            self.handle_edge(edge);
        }
    }

    /// Handle a single discrete edge
    ///
    /// Edges of a disabled map are ignored, except `Canceled`, which is how
    /// disabling a map releases actions that were in progress.
    pub fn handle_edge(&mut self, edge: ActionEdge) {
        if self.disposed {
            warn!(?edge, "Edge delivered to a disposed input reader");
            return;
        }
        if edge.phase != ActionPhase::Canceled
            && !self.bindings.is_map_enabled(edge.action.map())
        {
            trace!(action = %edge.action, phase = ?edge.phase, "edge from disabled map ignored");
            return;
        }
        trace!(action = %edge.action, phase = ?edge.phase, "edge");

        match (edge.action, edge.phase) {
            (Action::SprintMove, ActionPhase::Started) => self.is_sprinting = true,
            (Action::SprintMove, ActionPhase::Canceled) => self.is_sprinting = false,
            (Action::Scan, ActionPhase::Started) => self.events.emit(InputEvent::StartScan),
            (Action::Scan, ActionPhase::Canceled) => self.events.emit(InputEvent::StopScan),
            (Action::Pause, ActionPhase::Performed) => self.pause_enter(),
            (Action::Play, ActionPhase::Performed) => self.pause_exit(),
            _ => {}
        }
    }

    fn pause_enter(&mut self) {
        self.apply_mode(InputControlMode::Ui);
        self.events.emit(InputEvent::PauseEnter);
    }

    fn pause_exit(&mut self) {
        self.apply_mode(InputControlMode::Gameplay);
        self.events.emit(InputEvent::PauseExit);
    }

    fn apply_mode(&mut self, mode: InputControlMode) {
        match mode {
            InputControlMode::None => {
                self.bindings.disable_map(ActionMap::Ui);
                self.bindings.disable_map(ActionMap::Gameplay);
            }
            InputControlMode::Gameplay => {
                self.bindings.disable_map(ActionMap::Ui);
                self.bindings.enable_map(ActionMap::Gameplay);
            }
            InputControlMode::Ui => {
                self.bindings.disable_map(ActionMap::Gameplay);
                self.bindings.enable_map(ActionMap::Ui);
            }
        }

        let previous = self.mode.replace(mode);
        if previous != mode {
            debug!("Input mode {} -> {}", previous, mode);
        }
    }

    /// Release the bindings; no events fire afterwards
    ///
    /// Cancellations caused by disabling the bindings (a scan in progress,
    /// for instance) are still delivered before the reader goes quiet.
    /// Calling this more than once has no further effect.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.bindings.disable_all();
        self.pump();
        self.mode.set(InputControlMode::None);
        self.is_sprinting = false;
        self.disposed = true;
        debug!("Input reader disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn is_sprinting(&self) -> bool {
        self.is_sprinting
    }

    pub fn bindings(&self) -> &B {
        &self.bindings
    }


    fn subscribe_unit(
        &mut self,
        kind: InputEventKind,
        mut callback: impl FnMut() + 'static,
    ) -> SubscriptionId {
        self.events.subscribe(kind, move |_| callback())
    }

    fn subscribe_vector(
        &mut self,
        kind: InputEventKind,
        mut callback: impl FnMut(Vec3) + 'static,
    ) -> SubscriptionId {
        self.events.subscribe(kind, move |event| match event {
            InputEvent::Move(v) | InputEvent::SprintMove(v) => callback(*v),
            _ => {}
        })
    }
}

impl InputReader<InputControls> {
    /// Resolve the bindings against the latest device state
    ///
    /// Call once per frame after polling the device backend, then
    /// [`pump`](Self::pump) and [`tick`](Self::tick).
    pub fn update(&mut self, devices: &DeviceState) {
        self.bindings.update(devices);
    }
}

impl<B: InputBindings> Drop for InputReader<B> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<B: InputBindings> std::fmt::Debug for InputReader<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputReader")
            .field("mode", &self.mode.get())
            .field("is_sprinting", &self.is_sprinting)
            .field("disposed", &self.disposed)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

impl<B: InputBindings> EventSource for InputReader<B> {
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }
}

impl<B: InputBindings> MoveSource for InputReader<B> {
    fn on_move(&mut self, callback: impl FnMut(Vec3) + 'static) -> SubscriptionId {
        self.subscribe_vector(InputEventKind::Move, callback)
    }

    fn on_sprint_move(&mut self, callback: impl FnMut(Vec3) + 'static) -> SubscriptionId {
        self.subscribe_vector(InputEventKind::SprintMove, callback)
    }
}

impl<B: InputBindings> JumpSource for InputReader<B> {
    fn on_jump(&mut self, callback: impl FnMut() + 'static) -> SubscriptionId {
        self.subscribe_unit(InputEventKind::Jump, callback)
    }
}

impl<B: InputBindings> ScanSource for InputReader<B> {
    fn on_start_scan(&mut self, callback: impl FnMut() + 'static) -> SubscriptionId {
        self.subscribe_unit(InputEventKind::StartScan, callback)
    }

    fn on_stop_scan(&mut self, callback: impl FnMut() + 'static) -> SubscriptionId {
        self.subscribe_unit(InputEventKind::StopScan, callback)
    }
}

impl<B: InputBindings> PauseSource for InputReader<B> {
    fn on_pause_enter(&mut self, callback: impl FnMut() + 'static) -> SubscriptionId {
        self.subscribe_unit(InputEventKind::PauseEnter, callback)
    }

    fn on_pause_exit(&mut self, callback: impl FnMut() + 'static) -> SubscriptionId {
        self.subscribe_unit(InputEventKind::PauseExit, callback)
    }
}

impl<B: InputBindings> ModeSwitch for InputReader<B> {
    /// Switch the active action map. Ignored once the reader is disposed.
    fn change_mode(&mut self, mode: InputControlMode) {
        if self.disposed {
            warn!("change_mode({}) on a disposed input reader", mode);
            return;
        }
        self.apply_mode(mode);
    }

    fn mode(&self) -> InputControlMode {
        self.mode.get()
    }

    fn mode_watch(&self) -> ModeWatch {
        ModeWatch::new(self.mode.clone())
    }
}
