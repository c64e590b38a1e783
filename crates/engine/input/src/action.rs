//! Action maps, actions and edge phases

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named group of actions enabled and disabled as a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionMap {
    Gameplay,
    Ui,
}

impl ActionMap {
    /// Every action map
    pub const ALL: [ActionMap; 2] = [ActionMap::Gameplay, ActionMap::Ui];

    /// Actions belonging to this map
    pub fn actions(self) -> &'static [Action] {
        match self {
            ActionMap::Gameplay => &[
                Action::Move,
                Action::Jump,
                Action::SprintMove,
                Action::Scan,
                Action::Pause,
            ],
            ActionMap::Ui => &[Action::Play],
        }
    }
}

impl fmt::Display for ActionMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionMap::Gameplay => write!(f, "Gameplay"),
            ActionMap::Ui => write!(f, "UI"),
        }
    }
}

/// A named action inside an [`ActionMap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// 2D movement axis (continuous, sampled)
    Move,
    /// Jump button (sampled while held)
    Jump,
    /// Sprint modifier (discrete)
    SprintMove,
    /// Scan ability (discrete)
    Scan,
    /// Enter the pause menu (discrete)
    Pause,
    /// Leave the pause menu (discrete)
    Play,
}

impl Action {
    /// Every action across all maps
    pub const ALL: [Action; 6] = [
        Action::Move,
        Action::Jump,
        Action::SprintMove,
        Action::Scan,
        Action::Pause,
        Action::Play,
    ];

    /// The map that owns this action
    pub fn map(self) -> ActionMap {
        match self {
            Action::Play => ActionMap::Ui,
            _ => ActionMap::Gameplay,
        }
    }

    /// Continuous actions are sampled on demand and never produce edges
    pub fn is_continuous(self) -> bool {
        matches!(self, Action::Move | Action::Jump)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:?}", self.map(), self)
    }
}

/// Phase of a discrete action edge
///
/// A button press produces `Started` followed by `Performed`; releasing it
/// (or disabling its map while held) produces `Canceled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionPhase {
    Started,
    Performed,
    Canceled,
}

/// One edge delivered by the binding layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionEdge {
    pub action: Action,
    pub phase: ActionPhase,
}

impl ActionEdge {
    pub fn new(action: Action, phase: ActionPhase) -> Self {
        Self { action, phase }
    }
}
