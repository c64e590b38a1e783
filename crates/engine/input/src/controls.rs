//! Concrete bindings over device state
//!
//! [`InputControls`] resolves the configured bindings against a
//! [`DeviceState`] once per frame. Continuous actions are stored for
//! sampling; discrete actions go through edge detection and are queued as
//! [`ActionEdge`]s until the reader takes them one at a time.

use crate::action::{Action, ActionEdge, ActionMap, ActionPhase};
use crate::bindings::InputBindings;
use crate::config::{BindingsConfig, ButtonBindings, InputConfig, MoveBindings};
use devices::{DeviceState, KeyboardState};
use glam::Vec2;
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::{debug, trace};

/// Edge-detection state of one discrete action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Tracking {
    /// Released; the next press starts the action
    #[default]
    Waiting,
    /// Started and not yet canceled
    InProgress,
    /// Was already held when its map got enabled; ignored until released
    Suppressed,
}

/// Action maps bound to keyboard, mouse and gamepad controls
#[derive(Debug, Clone)]
pub struct InputControls {
    bindings: BindingsConfig,
    enabled: HashSet<ActionMap>,
    /// Device-level held state from the last update, regardless of map state
    held: HashMap<Action, bool>,
    move_value: Vec2,
    tracking: HashMap<Action, Tracking>,
    edges: VecDeque<ActionEdge>,
}

impl Default for InputControls {
    fn default() -> Self {
        Self::new(BindingsConfig::default())
    }
}

impl InputControls {
    /// Create controls with every map disabled
    pub fn new(bindings: BindingsConfig) -> Self {
        Self {
            bindings,
            enabled: HashSet::new(),
            held: HashMap::new(),
            move_value: Vec2::ZERO,
            tracking: HashMap::new(),
            edges: VecDeque::new(),
        }
    }

    pub fn from_config(config: &InputConfig) -> Self {
        Self::new(config.bindings.clone())
    }

    /// Resolve bindings against the latest device state
    ///
    /// Call once per frame after the device backend has been polled.
    pub fn update(&mut self, devices: &DeviceState) {
        self.move_value = resolve_move(&self.bindings.movement, devices);

        for action in Action::ALL {
            if action == Action::Move {
                continue;
            }
            let held = self
                .bindings
                .button(action)
                .is_some_and(|buttons| is_held(buttons, devices));
            self.held.insert(action, held);

            if action.is_continuous() || !self.enabled.contains(&action.map()) {
                continue;
            }

            let tracking = self.tracking.entry(action).or_default();
            match (*tracking, held) {
                (Tracking::Waiting, true) => {
                    *tracking = Tracking::InProgress;
                    self.edges.push_back(ActionEdge::new(action, ActionPhase::Started));
                    self.edges.push_back(ActionEdge::new(action, ActionPhase::Performed));
                    trace!("{} started", action);
                }
                (Tracking::InProgress, false) => {
                    *tracking = Tracking::Waiting;
                    self.edges.push_back(ActionEdge::new(action, ActionPhase::Canceled));
                    trace!("{} canceled", action);
                }
                (Tracking::Suppressed, false) => *tracking = Tracking::Waiting,
                _ => {}
            }
        }
    }

    /// Drop the queued `Started` of `action` and everything queued for it
    /// after that. Returns false when its start was already handed out.
    fn withdraw_pending_start(&mut self, action: Action) -> bool {
        let Some(start) = self
            .edges
            .iter()
            .rposition(|e| e.action == action && e.phase == ActionPhase::Started)
        else {
            return false;
        };

        let mut index = 0;
        self.edges.retain(|e| {
            let keep = index < start || e.action != action;
            index += 1;
            keep
        });
        true
    }

    fn held(&self, action: Action) -> bool {
        self.held.get(&action).copied().unwrap_or(false)
    }
}

impl InputBindings for InputControls {
    fn enable_map(&mut self, map: ActionMap) {
        if !self.enabled.insert(map) {
            return;
        }
        for &action in map.actions() {
            let tracking = if self.held(action) {
                Tracking::Suppressed
            } else {
                Tracking::Waiting
            };
            self.tracking.insert(action, tracking);
        }
        debug!("Action map {} enabled", map);
    }

    fn disable_map(&mut self, map: ActionMap) {
        if !self.enabled.remove(&map) {
            return;
        }
        for &action in map.actions() {
            if self.tracking.insert(action, Tracking::Waiting) != Some(Tracking::InProgress) {
                continue;
            }
            if self.withdraw_pending_start(action) {
                trace!("{} withdrawn by disable", action);
            } else {
                self.edges.push_back(ActionEdge::new(action, ActionPhase::Canceled));
                trace!("{} canceled by disable", action);
            }
        }
        debug!("Action map {} disabled", map);
    }

    fn is_map_enabled(&self, map: ActionMap) -> bool {
        self.enabled.contains(&map)
    }

    fn read_axis(&self, action: Action) -> Vec2 {
        if action == Action::Move && self.is_map_enabled(action.map()) {
            self.move_value
        } else {
            Vec2::ZERO
        }
    }

    fn is_pressed(&self, action: Action) -> bool {
        self.is_map_enabled(action.map()) && self.held(action)
    }

    fn next_edge(&mut self) -> Option<ActionEdge> {
        self.edges.pop_front()
    }
}

fn is_held(buttons: &ButtonBindings, devices: &DeviceState) -> bool {
    devices.keyboard.any_of(&buttons.keys)
        || buttons.mouse.iter().any(|b| devices.mouse.is_pressed(*b))
        || buttons.gamepad.iter().any(|b| devices.gamepad.is_pressed(*b))
}

/// Combine the key composite and the left stick
///
/// The key vector is normalized so diagonals are not faster. When both
/// sources are active the one with the larger magnitude wins.
fn resolve_move(bindings: &MoveBindings, devices: &DeviceState) -> Vec2 {
    let keys = key_composite(bindings, &devices.keyboard);
    let stick = if bindings.left_stick && devices.gamepad.connected {
        devices.gamepad.left_stick
    } else {
        Vec2::ZERO
    };

    if stick.length_squared() > keys.length_squared() {
        stick
    } else {
        keys
    }
}

fn key_composite(bindings: &MoveBindings, keyboard: &KeyboardState) -> Vec2 {
    let axis = |negative: &[devices::Key], positive: &[devices::Key]| -> f32 {
        let mut value = 0.0;
        if keyboard.any_of(positive) {
            value += 1.0;
        }
        if keyboard.any_of(negative) {
            value -= 1.0;
        }
        value
    };

    let raw = Vec2::new(
        axis(bindings.left.as_slice(), bindings.right.as_slice()),
        axis(bindings.down.as_slice(), bindings.up.as_slice()),
    );
    raw.normalize_or_zero()
}
