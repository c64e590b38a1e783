//! Binding configuration loaded from TOML
//!
//! ```toml
//! initial_mode = "gameplay"
//! stick_deadzone = 0.2
//!
//! [bindings.move]
//! up = ["W", "Up"]
//! down = ["S", "Down"]
//! left = ["A", "Left"]
//! right = ["D", "Right"]
//! left_stick = true
//!
//! [bindings.pause]
//! keys = ["Escape"]
//! gamepad = ["Start"]
//! ```
//!
//! Every field is optional; missing ones fall back to [`InputConfig::default`].

use crate::action::Action;
use crate::mode::InputControlMode;
use crate::{Error, Result};
use devices::gamepad::{DEFAULT_DEADZONE, MAX_DEADZONE};
use devices::{GamepadButton, Key, MouseButtonType};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Top-level input configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Mode the composition root switches to after start-up
    pub initial_mode: InputControlMode,
    /// Radial deadzone for the gamepad left stick
    pub stick_deadzone: f32,
    pub bindings: BindingsConfig,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            initial_mode: InputControlMode::Gameplay,
            stick_deadzone: DEFAULT_DEADZONE,
            bindings: BindingsConfig::default(),
        }
    }
}

impl InputConfig {
    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loading input config: {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Parse and validate configuration text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the bindings cannot use
    ///
    /// Unbound actions are allowed but logged, since they can never fire.
    pub fn validate(&self) -> Result<()> {
        if !self.stick_deadzone.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "stick_deadzone must be a finite number, got {}",
                self.stick_deadzone
            )));
        }
        if !(0.0..=MAX_DEADZONE).contains(&self.stick_deadzone) {
            warn!(
                "stick_deadzone {} outside 0..={}, it will be clamped",
                self.stick_deadzone, MAX_DEADZONE
            );
        }
        for action in Action::ALL {
            if self.bindings.is_unbound(action) {
                warn!("Action {} has no bindings", action);
            }
        }
        Ok(())
    }
}

/// Bindings for every action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingsConfig {
    #[serde(rename = "move")]
    pub movement: MoveBindings,
    pub jump: ButtonBindings,
    pub sprint_move: ButtonBindings,
    pub scan: ButtonBindings,
    pub pause: ButtonBindings,
    pub play: ButtonBindings,
}

impl Default for BindingsConfig {
    fn default() -> Self {
        Self {
            movement: MoveBindings::default(),
            jump: ButtonBindings {
                keys: vec![Key::Space],
                mouse: Vec::new(),
                gamepad: vec![GamepadButton::South],
            },
            sprint_move: ButtonBindings {
                keys: vec![Key::ShiftLeft],
                mouse: Vec::new(),
                gamepad: vec![GamepadButton::LeftThumb],
            },
            scan: ButtonBindings {
                keys: vec![Key::E],
                mouse: vec![MouseButtonType::Right],
                gamepad: vec![GamepadButton::West],
            },
            pause: ButtonBindings {
                keys: vec![Key::Escape],
                mouse: Vec::new(),
                gamepad: vec![GamepadButton::Start],
            },
            play: ButtonBindings {
                keys: vec![Key::Escape],
                mouse: Vec::new(),
                gamepad: vec![GamepadButton::Start],
            },
        }
    }
}

impl BindingsConfig {
    /// Button bindings for a discrete or held action; `None` for `Move`
    pub fn button(&self, action: Action) -> Option<&ButtonBindings> {
        match action {
            Action::Move => None,
            Action::Jump => Some(&self.jump),
            Action::SprintMove => Some(&self.sprint_move),
            Action::Scan => Some(&self.scan),
            Action::Pause => Some(&self.pause),
            Action::Play => Some(&self.play),
        }
    }

    fn is_unbound(&self, action: Action) -> bool {
        match self.button(action) {
            Some(buttons) => buttons.is_empty(),
            None => self.movement.is_empty(),
        }
    }
}

/// Controls that drive a button-like action; any one held counts as held
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonBindings {
    pub keys: Vec<Key>,
    pub mouse: Vec<MouseButtonType>,
    pub gamepad: Vec<GamepadButton>,
}

impl ButtonBindings {
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty() && self.mouse.is_empty() && self.gamepad.is_empty()
    }
}

/// Composite 2D binding for the move axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveBindings {
    pub up: Vec<Key>,
    pub down: Vec<Key>,
    pub left: Vec<Key>,
    pub right: Vec<Key>,
    /// Also read the gamepad left stick
    pub left_stick: bool,
}

impl Default for MoveBindings {
    fn default() -> Self {
        Self {
            up: vec![Key::W, Key::Up],
            down: vec![Key::S, Key::Down],
            left: vec![Key::A, Key::Left],
            right: vec![Key::D, Key::Right],
            left_stick: true,
        }
    }
}

impl MoveBindings {
    pub fn is_empty(&self) -> bool {
        self.up.is_empty()
            && self.down.is_empty()
            && self.left.is_empty()
            && self.right.is_empty()
            && !self.left_stick
    }
}
