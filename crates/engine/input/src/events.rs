//! Gameplay events and the publish/subscribe bus that delivers them
//!
//! Subscribers are invoked synchronously, in subscription order, on the
//! thread that emits the event.

use glam::Vec3;
use std::collections::HashMap;
use tracing::trace;

/// Semantic gameplay event emitted by the input reader
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Walk in a horizontal direction `(x, 0, y)`
    Move(Vec3),
    /// Sprint in a horizontal direction `(x, 0, y)`
    SprintMove(Vec3),
    Jump,
    StartScan,
    StopScan,
    PauseEnter,
    PauseExit,
}

impl InputEvent {
    pub fn kind(&self) -> InputEventKind {
        match self {
            InputEvent::Move(_) => InputEventKind::Move,
            InputEvent::SprintMove(_) => InputEventKind::SprintMove,
            InputEvent::Jump => InputEventKind::Jump,
            InputEvent::StartScan => InputEventKind::StartScan,
            InputEvent::StopScan => InputEventKind::StopScan,
            InputEvent::PauseEnter => InputEventKind::PauseEnter,
            InputEvent::PauseExit => InputEventKind::PauseExit,
        }
    }
}

/// Event name used as the subscription key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEventKind {
    Move,
    SprintMove,
    Jump,
    StartScan,
    StopScan,
    PauseEnter,
    PauseExit,
}

/// Handle returned by a subscription, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&InputEvent)>;

/// Mapping from event kind to its ordered subscriber list
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    subscribers: HashMap<InputEventKind, Vec<(SubscriptionId, Callback)>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for one event kind
    pub fn subscribe(
        &mut self,
        kind: InputEventKind,
        callback: impl FnMut(&InputEvent) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers
            .entry(kind)
            .or_default()
            .push((id, Box::new(callback)));
        id
    }

    /// Remove a subscription. Returns false if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        for list in self.subscribers.values_mut() {
            if let Some(index) = list.iter().position(|(sub, _)| *sub == id) {
                drop(list.remove(index));
                return true;
            }
        }
        false
    }

    /// Deliver an event to every subscriber of its kind
    pub fn emit(&mut self, event: InputEvent) {
        trace!(?event, "emit");
        if let Some(list) = self.subscribers.get_mut(&event.kind()) {
            for (_, callback) in list.iter_mut() {
                callback(&event);
            }
        }
    }

    /// Number of live subscriptions for a kind
    pub fn subscriber_count(&self, kind: InputEventKind) -> usize {
        self.subscribers.get(&kind).map_or(0, Vec::len)
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<_, _> = self
            .subscribers
            .iter()
            .map(|(kind, list)| (*kind, list.len()))
            .collect();
        f.debug_struct("EventBus").field("subscribers", &counts).finish()
    }
}
